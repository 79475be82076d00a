use lambda_http::http::header::{HeaderValue, VARY};
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use lustre_atoms as atoms;
use lustre_shared::{booking, AppState};
use showroom_block::cards;
use std::env;
use std::sync::Arc;

fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,PUT,PATCH,DELETE,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type"),
    );
    headers.append(VARY, HeaderValue::from_static("Origin"));

    resp
}

fn finalize_response(resp: Result<Response<Body>, Error>) -> Result<Response<Body>, Error> {
    resp.map(with_cors_headers)
}

fn not_found() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::json!({"error": "Not found"}).to_string().into())
        .map_err(Box::new)?)
}

fn method_not_allowed() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({"error": "Method not allowed"})
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}

/// Main Lambda handler - routes requests to the public and admin endpoints
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    tracing::info!("🚀 API Lambda invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp));
    }

    let table_name = env::var("TABLE_NAME").unwrap_or_else(|_| "lustre".to_string());
    let locale = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("locale"))
        .map(|s| s.to_string());

    // Booking form route (public)
    if path == "/contact" {
        return match method {
            &Method::POST => finalize_response(
                booking::handle_booking(
                    &state.ses_client,
                    &state.dynamo_client,
                    &table_name,
                    body,
                )
                .await,
            ),
            _ => finalize_response(method_not_allowed()),
        };
    }

    // Translation dictionary routes (public)
    if path.starts_with("/i18n") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        return match (method, parts.as_slice()) {
            (&Method::GET, ["i18n", locale]) => {
                finalize_response(atoms::i18n::get_locale_handler(&state.translations, locale).await)
            }
            _ => finalize_response(not_found()),
        };
    }

    // Gallery routes
    if path.starts_with("/gallery") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let resp = match (method, parts.as_slice()) {
            // GET /gallery - list items; ?locale=xx returns localized cards
            (&Method::GET, ["gallery"]) => match &locale {
                Some(locale) => {
                    cards::list_gallery_cards(
                        &state.dynamo_client,
                        &table_name,
                        &state.translations,
                        locale,
                    )
                    .await
                }
                None => {
                    atoms::gallery::list_gallery_items_handler(&state.dynamo_client, &table_name)
                        .await
                }
            },
            // POST /gallery - create item
            (&Method::POST, ["gallery"]) => {
                atoms::gallery::create_gallery_item_handler(
                    &state.dynamo_client,
                    &table_name,
                    body,
                )
                .await
            }
            // GET /gallery/{id} - get item; ?locale=xx returns localized detail
            (&Method::GET, ["gallery", item_id]) => match &locale {
                Some(locale) => {
                    cards::get_gallery_detail(
                        &state.dynamo_client,
                        &table_name,
                        &state.translations,
                        locale,
                        item_id,
                    )
                    .await
                }
                None => {
                    atoms::gallery::get_gallery_item_handler(
                        &state.dynamo_client,
                        &table_name,
                        item_id,
                    )
                    .await
                }
            },
            // PUT /gallery/{id} - sanitize-and-store partial update
            (&Method::PUT, ["gallery", item_id]) => {
                atoms::gallery::update_gallery_item_handler(
                    &state.dynamo_client,
                    &table_name,
                    item_id,
                    body,
                )
                .await
            }
            // DELETE /gallery/{id} - delete item
            (&Method::DELETE, ["gallery", item_id]) => {
                atoms::gallery::delete_gallery_item_handler(
                    &state.dynamo_client,
                    &table_name,
                    item_id,
                )
                .await
            }
            _ => not_found(),
        };

        return finalize_response(resp);
    }

    // Appointment routes (admin)
    if path.starts_with("/appointments") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let resp = match (method, parts.as_slice()) {
            (&Method::GET, ["appointments"]) => {
                atoms::appointments::list_appointments_handler(&state.dynamo_client, &table_name)
                    .await
            }
            (&Method::POST, ["appointments"]) => {
                atoms::appointments::create_appointment_handler(
                    &state.dynamo_client,
                    &table_name,
                    body,
                )
                .await
            }
            (&Method::GET, ["appointments", appointment_id]) => {
                atoms::appointments::get_appointment_handler(
                    &state.dynamo_client,
                    &table_name,
                    appointment_id,
                )
                .await
            }
            (&Method::PATCH, ["appointments", appointment_id]) => {
                atoms::appointments::update_appointment_handler(
                    &state.dynamo_client,
                    &table_name,
                    appointment_id,
                    body,
                )
                .await
            }
            (&Method::DELETE, ["appointments", appointment_id]) => {
                atoms::appointments::delete_appointment_handler(
                    &state.dynamo_client,
                    &table_name,
                    appointment_id,
                )
                .await
            }
            _ => not_found(),
        };

        return finalize_response(resp);
    }

    // Testimonial routes (public list/create, admin moderation)
    if path.starts_with("/testimonials") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let include_all = event
            .query_string_parameters_ref()
            .and_then(|params| params.first("all"))
            .map(|v| v == "true")
            .unwrap_or(false);

        let resp = match (method, parts.as_slice()) {
            (&Method::GET, ["testimonials"]) => {
                atoms::testimonials::list_testimonials_handler(
                    &state.dynamo_client,
                    &table_name,
                    include_all,
                )
                .await
            }
            (&Method::POST, ["testimonials"]) => {
                atoms::testimonials::create_testimonial_handler(
                    &state.dynamo_client,
                    &table_name,
                    body,
                )
                .await
            }
            (&Method::PATCH, ["testimonials", testimonial_id]) => {
                atoms::testimonials::update_testimonial_handler(
                    &state.dynamo_client,
                    &table_name,
                    testimonial_id,
                    body,
                )
                .await
            }
            (&Method::DELETE, ["testimonials", testimonial_id]) => {
                atoms::testimonials::delete_testimonial_handler(
                    &state.dynamo_client,
                    &table_name,
                    testimonial_id,
                )
                .await
            }
            _ => not_found(),
        };

        return finalize_response(resp);
    }

    // No matching route
    tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
    finalize_response(not_found())
}
