use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error as LambdaError, Response};

use super::model::{is_valid_status, CreateAppointmentPayload, UpdateAppointmentPayload};
use super::service::{
    create_appointment, delete_appointment, get_appointment, list_appointments,
    update_appointment,
};

fn bad_request(message: &str) -> Result<Response<Body>, LambdaError> {
    Ok(Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::json!({"error": message}).to_string().into())
        .map_err(Box::new)?)
}

/// HTTP Handler: GET /appointments
pub async fn list_appointments_handler(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, LambdaError> {
    match list_appointments(client, table_name).await {
        Ok(appointments) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&appointments)?.into())
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}

/// HTTP Handler: POST /appointments
pub async fn create_appointment_handler(
    client: &DynamoClient,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, LambdaError> {
    let payload: CreateAppointmentPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return bad_request(&format!("Invalid request body: {}", e)),
    };

    if payload.customer_name.trim().is_empty() {
        return bad_request("Customer name is required");
    }
    if payload.email.is_empty() || !payload.email.contains('@') {
        return bad_request("Please provide a valid email address");
    }
    if payload.service.trim().is_empty() {
        return bad_request("Service is required");
    }

    match create_appointment(client, table_name, payload).await {
        Ok(appointment) => Ok(Response::builder()
            .status(StatusCode::CREATED)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&appointment)?.into())
            .map_err(Box::new)?),
        Err(e) => Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": e}).to_string().into())
            .map_err(Box::new)?),
    }
}

/// HTTP Handler: GET /appointments/{id}
pub async fn get_appointment_handler(
    client: &DynamoClient,
    table_name: &str,
    appointment_id: &str,
) -> Result<Response<Body>, LambdaError> {
    match get_appointment(client, table_name, appointment_id).await {
        Ok(appointment) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&appointment)?.into())
            .map_err(Box::new)?),
        Err(e) if e == "Appointment not found" => Ok(Response::builder()
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

/// HTTP Handler: PATCH /appointments/{id}
pub async fn update_appointment_handler(
    client: &DynamoClient,
    table_name: &str,
    appointment_id: &str,
    body: &[u8],
) -> Result<Response<Body>, LambdaError> {
    let payload: UpdateAppointmentPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return bad_request(&format!("Invalid request body: {}", e)),
    };

    if let Some(status) = &payload.status {
        if !is_valid_status(status) {
            return bad_request("Invalid status");
        }
    }

    match update_appointment(client, table_name, appointment_id, payload).await {
        Ok(appointment) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&appointment)?.into())
            .map_err(Box::new)?),
        Err(e) if e == "Appointment not found" => Ok(Response::builder()
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

/// HTTP Handler: DELETE /appointments/{id}
pub async fn delete_appointment_handler(
    client: &DynamoClient,
    table_name: &str,
    appointment_id: &str,
) -> Result<Response<Body>, LambdaError> {
    match delete_appointment(client, table_name, appointment_id).await {
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
