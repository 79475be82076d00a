use lambda_http::{http::StatusCode, Body, Error as LambdaError, Response};

use super::model::TranslationCatalog;

/// HTTP Handler: GET /i18n/{locale}
pub async fn get_locale_handler(
    catalog: &TranslationCatalog,
    locale: &str,
) -> Result<Response<Body>, LambdaError> {
    match catalog.locale(locale) {
        Some(dictionary) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(dictionary)?.into())
            .map_err(Box::new)?),
        None => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(
                serde_json::json!({"error": "Locale not found"})
                    .to_string()
                    .into(),
            )
            .map_err(Box::new)?),
    }
}
