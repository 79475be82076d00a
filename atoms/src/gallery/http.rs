use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error as LambdaError, Response};

use super::model::{CreateGalleryItemPayload, UpdateGalleryItemPayload};
use super::service::{
    create_gallery_item, delete_gallery_item, get_gallery_item, list_gallery_items,
    update_gallery_item,
};

fn bad_request(message: &str) -> Result<Response<Body>, LambdaError> {
    Ok(Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::json!({"error": message}).to_string().into())
        .map_err(Box::new)?)
}

/// HTTP Handler: GET /gallery
pub async fn list_gallery_items_handler(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, LambdaError> {
    match list_gallery_items(client, table_name).await {
        Ok(items) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&items)?.into())
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}

/// HTTP Handler: POST /gallery
pub async fn create_gallery_item_handler(
    client: &DynamoClient,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, LambdaError> {
    let payload: CreateGalleryItemPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return bad_request(&format!("Invalid request body: {}", e)),
    };

    // Required-field checks live here, not in the sanitizer
    if payload.title.trim().is_empty() {
        return bad_request("Title is required");
    }
    if payload.categories.is_empty() {
        return bad_request("At least one category is required");
    }

    match create_gallery_item(client, table_name, payload).await {
        Ok(item) => Ok(Response::builder()
            .status(StatusCode::CREATED)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&item)?.into())
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}

/// HTTP Handler: GET /gallery/{id}
pub async fn get_gallery_item_handler(
    client: &DynamoClient,
    table_name: &str,
    item_id: &str,
) -> Result<Response<Body>, LambdaError> {
    match get_gallery_item(client, table_name, item_id).await {
        Ok(item) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&item)?.into())
            .map_err(Box::new)?),
        Err(e) if e == "Gallery item not found" => Ok(Response::builder()
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

/// HTTP Handler: PUT /gallery/{id}
pub async fn update_gallery_item_handler(
    client: &DynamoClient,
    table_name: &str,
    item_id: &str,
    body: &[u8],
) -> Result<Response<Body>, LambdaError> {
    let payload: UpdateGalleryItemPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return bad_request(&format!("Invalid request body: {}", e)),
    };

    if let Some(categories) = &payload.categories {
        if categories.is_empty() {
            return bad_request("Categories cannot be emptied");
        }
    }

    match update_gallery_item(client, table_name, item_id, payload).await {
        Ok(item) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&item)?.into())
            .map_err(Box::new)?),
        Err(e) if e == "Gallery item not found" => Ok(Response::builder()
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

/// HTTP Handler: DELETE /gallery/{id}
pub async fn delete_gallery_item_handler(
    client: &DynamoClient,
    table_name: &str,
    item_id: &str,
) -> Result<Response<Body>, LambdaError> {
    match delete_gallery_item(client, table_name, item_id).await {
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
