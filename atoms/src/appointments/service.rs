use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::model::{Appointment, CreateAppointmentPayload, UpdateAppointmentPayload};

fn appointment_from_attrs(
    appointment_id: &str,
    item: &HashMap<String, AttributeValue>,
) -> Appointment {
    Appointment {
        appointment_id: appointment_id.to_string(),
        customer_name: item
            .get("customer_name")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        email: item
            .get("email")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        phone: item
            .get("phone")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        service: item
            .get("service")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        vehicle: item
            .get("vehicle")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        preferred_date: item
            .get("preferred_date")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        message: item
            .get("message")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        status: item
            .get("status")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "pending".to_string()),
        created_at: item
            .get("created_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        updated_at: item
            .get("updated_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
    }
}

/// Create a new appointment (always starts as "pending")
pub async fn create_appointment(
    client: &DynamoClient,
    table_name: &str,
    payload: CreateAppointmentPayload,
) -> Result<Appointment, String> {
    let appointment_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let pk = "APPOINTMENT".to_string();
    let sk = format!("APPT#{}", appointment_id);

    let mut builder = client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S(pk))
        .item("SK", AttributeValue::S(sk))
        .item(
            "customer_name",
            AttributeValue::S(payload.customer_name.clone()),
        )
        .item("email", AttributeValue::S(payload.email.clone()))
        .item("service", AttributeValue::S(payload.service.clone()))
        .item("status", AttributeValue::S("pending".to_string()))
        .item("created_at", AttributeValue::S(now.clone()));

    if let Some(phone) = &payload.phone {
        builder = builder.item("phone", AttributeValue::S(phone.clone()));
    }
    if let Some(vehicle) = &payload.vehicle {
        builder = builder.item("vehicle", AttributeValue::S(vehicle.clone()));
    }
    if let Some(preferred_date) = &payload.preferred_date {
        builder = builder.item("preferred_date", AttributeValue::S(preferred_date.clone()));
    }
    if let Some(message) = &payload.message {
        builder = builder.item("message", AttributeValue::S(message.clone()));
    }

    builder
        .send()
        .await
        .map_err(|e| format!("DynamoDB put_item error: {}", e))?;

    Ok(Appointment {
        appointment_id,
        customer_name: payload.customer_name,
        email: payload.email,
        phone: payload.phone,
        service: payload.service,
        vehicle: payload.vehicle,
        preferred_date: payload.preferred_date,
        message: payload.message,
        status: "pending".to_string(),
        created_at: now,
        updated_at: None,
    })
}

/// List all appointments, newest first
pub async fn list_appointments(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Appointment>, String> {
    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S("APPOINTMENT".to_string()))
        .expression_attribute_values(":sk_prefix", AttributeValue::S("APPT#".to_string()))
        .send()
        .await
        .map_err(|e| format!("DynamoDB query error: {}", e))?;

    let mut appointments = Vec::new();
    for item in result.items() {
        if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
            if let Some(appointment_id) = sk.strip_prefix("APPT#") {
                appointments.push(appointment_from_attrs(appointment_id, item));
            }
        }
    }

    appointments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(appointments)
}

/// Get a specific appointment
pub async fn get_appointment(
    client: &DynamoClient,
    table_name: &str,
    appointment_id: &str,
) -> Result<Appointment, String> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("APPOINTMENT".to_string()))
        .key("SK", AttributeValue::S(format!("APPT#{}", appointment_id)))
        .send()
        .await
        .map_err(|e| format!("DynamoDB get_item error: {}", e))?;

    if let Some(item) = result.item() {
        Ok(appointment_from_attrs(appointment_id, item))
    } else {
        Err("Appointment not found".to_string())
    }
}

/// Update an appointment (status / schedule fields)
pub async fn update_appointment(
    client: &DynamoClient,
    table_name: &str,
    appointment_id: &str,
    payload: UpdateAppointmentPayload,
) -> Result<Appointment, String> {
    let pk = "APPOINTMENT".to_string();
    let sk = format!("APPT#{}", appointment_id);
    let now = chrono::Utc::now().to_rfc3339();

    // Always stamp the update time
    let mut update_parts: Vec<&str> = vec!["updated_at = :updated_at"];
    let mut expr_names = HashMap::new();
    let mut expr_values: Vec<(String, AttributeValue)> =
        vec![(":updated_at".to_string(), AttributeValue::S(now))];

    if let Some(status) = &payload.status {
        update_parts.push("#status = :status");
        expr_names.insert("#status".to_string(), "status".to_string());
        expr_values.push((":status".to_string(), AttributeValue::S(status.clone())));
    }
    if let Some(preferred_date) = &payload.preferred_date {
        update_parts.push("preferred_date = :preferred_date");
        expr_values.push((
            ":preferred_date".to_string(),
            AttributeValue::S(preferred_date.clone()),
        ));
    }
    if let Some(message) = &payload.message {
        update_parts.push("message = :message");
        expr_values.push((":message".to_string(), AttributeValue::S(message.clone())));
    }

    let update_expression = format!("SET {}", update_parts.join(", "));

    let mut builder = client
        .update_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S(pk))
        .key("SK", AttributeValue::S(sk))
        .update_expression(update_expression);

    for (k, v) in expr_names {
        builder = builder.expression_attribute_names(k, v);
    }
    for (k, v) in expr_values {
        builder = builder.expression_attribute_values(k, v);
    }

    builder
        .send()
        .await
        .map_err(|e| format!("DynamoDB update_item error: {}", e))?;

    get_appointment(client, table_name, appointment_id).await
}

/// Delete an appointment
pub async fn delete_appointment(
    client: &DynamoClient,
    table_name: &str,
    appointment_id: &str,
) -> Result<(), String> {
    client
        .delete_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("APPOINTMENT".to_string()))
        .key("SK", AttributeValue::S(format!("APPT#{}", appointment_id)))
        .send()
        .await
        .map_err(|e| format!("DynamoDB delete_item error: {}", e))?;

    Ok(())
}
