use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error as LambdaError, Response};

use super::model::{is_valid_rating, CreateTestimonialPayload, UpdateTestimonialPayload};
use super::service::{
    create_testimonial, delete_testimonial, list_testimonials, update_testimonial,
};

fn bad_request(message: &str) -> Result<Response<Body>, LambdaError> {
    Ok(Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::json!({"error": message}).to_string().into())
        .map_err(Box::new)?)
}

/// HTTP Handler: GET /testimonials (approved only unless `include_all`)
pub async fn list_testimonials_handler(
    client: &DynamoClient,
    table_name: &str,
    include_all: bool,
) -> Result<Response<Body>, LambdaError> {
    match list_testimonials(client, table_name, !include_all).await {
        Ok(testimonials) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&testimonials)?.into())
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}

/// HTTP Handler: POST /testimonials
pub async fn create_testimonial_handler(
    client: &DynamoClient,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, LambdaError> {
    let payload: CreateTestimonialPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return bad_request(&format!("Invalid request body: {}", e)),
    };

    if payload.author.trim().is_empty() {
        return bad_request("Author is required");
    }
    if payload.text.trim().is_empty() {
        return bad_request("Text is required");
    }
    if !is_valid_rating(payload.rating) {
        return bad_request("Rating must be between 1 and 5");
    }

    match create_testimonial(client, table_name, payload).await {
        Ok(testimonial) => Ok(Response::builder()
            .status(StatusCode::CREATED)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&testimonial)?.into())
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}

/// HTTP Handler: PATCH /testimonials/{id}
pub async fn update_testimonial_handler(
    client: &DynamoClient,
    table_name: &str,
    testimonial_id: &str,
    body: &[u8],
) -> Result<Response<Body>, LambdaError> {
    let payload: UpdateTestimonialPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return bad_request(&format!("Invalid request body: {}", e)),
    };

    if let Some(rating) = payload.rating {
        if !is_valid_rating(rating) {
            return bad_request("Rating must be between 1 and 5");
        }
    }

    match update_testimonial(client, table_name, testimonial_id, payload).await {
        Ok(testimonial) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&testimonial)?.into())
            .map_err(Box::new)?),
        Err(e) if e == "Testimonial not found" => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}

/// HTTP Handler: DELETE /testimonials/{id}
pub async fn delete_testimonial_handler(
    client: &DynamoClient,
    table_name: &str,
    testimonial_id: &str,
) -> Result<Response<Body>, LambdaError> {
    match delete_testimonial(client, table_name, testimonial_id).await {
        Ok(_) => Ok(Response::builder()
            .status(StatusCode::NO_CONTENT)
            .header("Access-Control-Allow-Origin", "*")
            .body(Body::Empty)
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}
