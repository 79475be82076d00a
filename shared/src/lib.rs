pub mod booking;
pub mod email;

use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_sesv2::Client as SesClient;
use lustre_atoms::i18n::TranslationCatalog;

/// Process-wide clients and resources, built once at cold start and shared
/// across invocations.
pub struct AppState {
    pub dynamo_client: DynamoClient,
    pub ses_client: SesClient,
    pub translations: TranslationCatalog,
}

impl AppState {
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let dynamo_client = DynamoClient::new(&config);
        let ses_client = SesClient::new(&config);

        let i18n_dir = std::env::var("I18N_DIR").unwrap_or_else(|_| "i18n".to_string());
        let translations =
            match TranslationCatalog::load_dir(std::path::Path::new(&i18n_dir)) {
                Ok(catalog) => catalog,
                Err(e) => {
                    // Missing catalog is survivable: all reads fall back to plain text
                    tracing::warn!("Translation catalog unavailable ({}), using empty: {}", i18n_dir, e);
                    TranslationCatalog::new()
                }
            };

        Self {
            dynamo_client,
            ses_client,
            translations,
        }
    }
}
