use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::model::{CreateTestimonialPayload, Testimonial, UpdateTestimonialPayload};

fn testimonial_from_attrs(
    testimonial_id: &str,
    item: &HashMap<String, AttributeValue>,
) -> Testimonial {
    Testimonial {
        testimonial_id: testimonial_id.to_string(),
        author: item
            .get("author")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        vehicle: item
            .get("vehicle")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        text: item
            .get("text")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        rating: item
            .get("rating")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0),
        approved: item
            .get("approved")
            .and_then(|v| v.as_bool().ok())
            .copied()
            .unwrap_or(false),
        created_at: item
            .get("created_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
    }
}

/// Create a new testimonial (unapproved until an admin flips it)
pub async fn create_testimonial(
    client: &DynamoClient,
    table_name: &str,
    payload: CreateTestimonialPayload,
) -> Result<Testimonial, String> {
    let testimonial_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let pk = "TESTIMONIAL".to_string();
    let sk = format!("TESTIMONIAL#{}", testimonial_id);

    let mut builder = client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S(pk))
        .item("SK", AttributeValue::S(sk))
        .item("author", AttributeValue::S(payload.author.clone()))
        .item("text", AttributeValue::S(payload.text.clone()))
        .item("rating", AttributeValue::N(payload.rating.to_string()))
        .item("approved", AttributeValue::Bool(false))
        .item("created_at", AttributeValue::S(now.clone()));

    if let Some(vehicle) = &payload.vehicle {
        builder = builder.item("vehicle", AttributeValue::S(vehicle.clone()));
    }

    builder
        .send()
        .await
        .map_err(|e| format!("DynamoDB put_item error: {}", e))?;

    Ok(Testimonial {
        testimonial_id,
        author: payload.author,
        vehicle: payload.vehicle,
        text: payload.text,
        rating: payload.rating,
        approved: false,
        created_at: now,
    })
}

/// List testimonials, newest first; `approved_only` hides unreviewed entries
/// (the public read path)
pub async fn list_testimonials(
    client: &DynamoClient,
    table_name: &str,
    approved_only: bool,
) -> Result<Vec<Testimonial>, String> {
    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S("TESTIMONIAL".to_string()))
        .expression_attribute_values(":sk_prefix", AttributeValue::S("TESTIMONIAL#".to_string()))
        .send()
        .await
        .map_err(|e| format!("DynamoDB query error: {}", e))?;

    let mut testimonials = Vec::new();
    for item in result.items() {
        if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
            if let Some(testimonial_id) = sk.strip_prefix("TESTIMONIAL#") {
                let testimonial = testimonial_from_attrs(testimonial_id, item);
                if !approved_only || testimonial.approved {
                    testimonials.push(testimonial);
                }
            }
        }
    }

    testimonials.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(testimonials)
}

/// Get a specific testimonial
pub async fn get_testimonial(
    client: &DynamoClient,
    table_name: &str,
    testimonial_id: &str,
) -> Result<Testimonial, String> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("TESTIMONIAL".to_string()))
        .key(
            "SK",
            AttributeValue::S(format!("TESTIMONIAL#{}", testimonial_id)),
        )
        .send()
        .await
        .map_err(|e| format!("DynamoDB get_item error: {}", e))?;

    if let Some(item) = result.item() {
        Ok(testimonial_from_attrs(testimonial_id, item))
    } else {
        Err("Testimonial not found".to_string())
    }
}

/// Update a testimonial (edits and the approval flag)
pub async fn update_testimonial(
    client: &DynamoClient,
    table_name: &str,
    testimonial_id: &str,
    payload: UpdateTestimonialPayload,
) -> Result<Testimonial, String> {
    let pk = "TESTIMONIAL".to_string();
    let sk = format!("TESTIMONIAL#{}", testimonial_id);

    let mut update_expr = vec![];
    let mut expr_names = HashMap::new();
    let mut expr_values = HashMap::new();

    if let Some(author) = payload.author {
        update_expr.push("author = :author");
        expr_values.insert(":author".to_string(), AttributeValue::S(author));
    }
    if let Some(vehicle) = payload.vehicle {
        update_expr.push("vehicle = :vehicle");
        expr_values.insert(":vehicle".to_string(), AttributeValue::S(vehicle));
    }
    if let Some(text) = payload.text {
        update_expr.push("#text = :text");
        expr_names.insert("#text".to_string(), "text".to_string());
        expr_values.insert(":text".to_string(), AttributeValue::S(text));
    }
    if let Some(rating) = payload.rating {
        update_expr.push("rating = :rating");
        expr_values.insert(":rating".to_string(), AttributeValue::N(rating.to_string()));
    }
    if let Some(approved) = payload.approved {
        update_expr.push("approved = :approved");
        expr_values.insert(":approved".to_string(), AttributeValue::Bool(approved));
    }

    if !update_expr.is_empty() {
        let update_expression = format!("SET {}", update_expr.join(", "));

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
    }

    get_testimonial(client, table_name, testimonial_id).await
}

/// Delete a testimonial
pub async fn delete_testimonial(
    client: &DynamoClient,
    table_name: &str,
    testimonial_id: &str,
) -> Result<(), String> {
    client
        .delete_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("TESTIMONIAL".to_string()))
        .key(
            "SK",
            AttributeValue::S(format!("TESTIMONIAL#{}", testimonial_id)),
        )
        .send()
        .await
        .map_err(|e| format!("DynamoDB delete_item error: {}", e))?;

    Ok(())
}
