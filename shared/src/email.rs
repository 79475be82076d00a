use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client as SesClient;

use lustre_atoms::appointments::model::Appointment;

/// Notify the shop inbox about a new booking request.
pub async fn send_booking_email(
    ses_client: &SesClient,
    appointment: &Appointment,
) -> Result<(), String> {
    let to_address = std::env::var("BOOKING_NOTIFY_EMAIL")
        .unwrap_or_else(|_| "bookings@lustreautobody.com".to_string());
    let from_address = std::env::var("BOOKING_FROM_EMAIL")
        .unwrap_or_else(|_| "no-reply@lustreautobody.com".to_string());

    let subject = Content::builder()
        .data(format!(
            "New booking request: {} ({})",
            appointment.service, appointment.customer_name
        ))
        .charset("UTF-8")
        .build()
        .map_err(|e| format!("Failed to build email subject: {}", e))?;

    let body_text = Content::builder()
        .data(format!(
            "Customer: {}\nEmail: {}\nPhone: {}\nService: {}\nVehicle: {}\nPreferred date: {}\n\n{}",
            appointment.customer_name,
            appointment.email,
            appointment.phone.as_deref().unwrap_or("-"),
            appointment.service,
            appointment.vehicle.as_deref().unwrap_or("-"),
            appointment.preferred_date.as_deref().unwrap_or("-"),
            appointment.message.as_deref().unwrap_or(""),
        ))
        .charset("UTF-8")
        .build()
        .map_err(|e| format!("Failed to build email body: {}", e))?;

    let message = Message::builder()
        .subject(subject)
        .body(Body::builder().text(body_text).build())
        .build();

    let content = EmailContent::builder().simple(message).build();

    ses_client
        .send_email()
        .from_email_address(from_address)
        .destination(Destination::builder().to_addresses(to_address).build())
        .content(content)
        .send()
        .await
        .map_err(|e| format!("SES send_email error: {}", e))?;

    Ok(())
}
