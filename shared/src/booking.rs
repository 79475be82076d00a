use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_sesv2::Client as SesClient;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::{Deserialize, Serialize};

use lustre_atoms::appointments::model::CreateAppointmentPayload;
use lustre_atoms::appointments::service::create_appointment;

use crate::email::send_booking_email;

#[derive(Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub vehicle: Option<String>,
    pub preferred_date: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
struct BookingResponse {
    message: String,
    appointment_id: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

fn bad_request(error: &str, message: &str) -> Result<Response<Body>, Error> {
    let error = ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
    };
    Ok(Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(&error)?.into())
        .map_err(Box::new)?)
}

/// Handle a public booking form submission: validate, persist the
/// appointment, then notify the shop inbox.
pub async fn handle_booking(
    ses_client: &SesClient,
    dynamo_client: &DynamoClient,
    table_name: &str,
    body: &Body,
) -> Result<Response<Body>, Error> {
    let body_str = match body {
        Body::Text(text) => text,
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or(""),
        Body::Empty => "",
    };

    tracing::info!("Booking form submission received");

    let booking: BookingRequest = match serde_json::from_str(body_str) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!("Failed to parse booking request: {}", e);
            return bad_request("InvalidRequest", &format!("Invalid request body: {}", e));
        }
    };

    // Basic validation
    if booking.customer_name.trim().is_empty() {
        return bad_request("InvalidName", "Please provide your name");
    }
    if booking.email.is_empty() || !booking.email.contains('@') {
        return bad_request("InvalidEmail", "Please provide a valid email address");
    }
    if booking.service.trim().is_empty() {
        return bad_request("InvalidService", "Please select a service");
    }

    let payload = CreateAppointmentPayload {
        customer_name: booking.customer_name,
        email: booking.email,
        phone: booking.phone,
        service: booking.service,
        vehicle: booking.vehicle,
        preferred_date: booking.preferred_date,
        message: booking.message,
    };

    let appointment = match create_appointment(dynamo_client, table_name, payload).await {
        Ok(appointment) => appointment,
        Err(e) => {
            tracing::error!("Failed to store booking: {}", e);
            let error = ErrorResponse {
                error: "BookingFailed".to_string(),
                message: "Failed to submit booking. Please try again later.".to_string(),
            };
            return Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(serde_json::to_string(&error)?.into())
                .map_err(Box::new)?);
        }
    };

    // The booking is already recorded; a failed notification is not fatal
    if let Err(e) = send_booking_email(ses_client, &appointment).await {
        tracing::error!("Failed to send booking notification: {}", e);
    } else {
        tracing::info!(
            "Booking notification sent for appointment {}",
            appointment.appointment_id
        );
    }

    let response = BookingResponse {
        message: "Booking request received".to_string(),
        appointment_id: appointment.appointment_id,
    };
    Ok(Response::builder()
        .status(StatusCode::CREATED)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(&response)?.into())
        .map_err(Box::new)?)
}
