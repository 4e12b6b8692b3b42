use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};

use crate::db::supabase::{ProfileStore, StoreError};
use crate::models::event::CheckoutSession;
use crate::models::profile::ProfileUpdate;

const CHECKOUT_COMPLETED: &str = "checkout.session.completed";

enum WebhookError {
    /// The request body could not be read as an event. Mapped to 400 with
    /// the message echoed back.
    Payload(String),
    /// The profile store refused the update. Mapped to 500 with a fixed
    /// body; the detail is logged server-side only.
    Store(StoreError),
}

/// Stripe webhook endpoint. Every delivery gets exactly one of four
/// responses: 200 `{"received": true}` on success or any event we don't
/// act on, 400 on an unreadable payload, 500 when the store update fails,
/// 405 for non-POST methods (handled by `method_not_allowed`).
pub async fn stripe_webhook<S: ProfileStore + 'static>(
    store: web::Data<S>,
    payload: web::Bytes,
) -> impl Responder {
    match process_event(store.get_ref(), &payload).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "received": true })),
        Err(WebhookError::Store(e)) => {
            eprintln!("Error updating Supabase: {}", e);
            HttpResponse::InternalServerError().json(json!({ "error": "Database update failed" }))
        }
        Err(WebhookError::Payload(message)) => {
            eprintln!("Webhook error: {}", message);
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
    }
}

async fn process_event<S: ProfileStore>(store: &S, payload: &[u8]) -> Result<(), WebhookError> {
    let event: Value =
        serde_json::from_slice(payload).map_err(|e| WebhookError::Payload(e.to_string()))?;

    // Anything other than a completed checkout is acknowledged untouched,
    // including events with a missing or non-string type.
    if event.get("type").and_then(Value::as_str) != Some(CHECKOUT_COMPLETED) {
        return Ok(());
    }

    // A matched event without a data.object is malformed, but a session
    // that is some other scalar just has no fields to read from.
    let object = &event["data"]["object"];
    if object.is_null() {
        return Err(WebhookError::Payload(
            "missing data.object in checkout.session.completed event".to_string(),
        ));
    }
    if !object.is_object() {
        return Ok(());
    }

    let session: CheckoutSession = serde_json::from_value(object.clone())
        .map_err(|e| WebhookError::Payload(e.to_string()))?;

    let email = match session.resolved_email() {
        Some(email) => email,
        None => return Ok(()),
    };

    println!("Payment received for: {}", email);

    let update = ProfileUpdate::activate(session.customer.clone());
    store
        .update_profile(&email, &update)
        .await
        .map_err(WebhookError::Store)?;

    println!("User {} is now ACTIVE", email);
    Ok(())
}

/// Fallback route for every non-POST method on the webhook path.
pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(json!({ "error": "Method not allowed" }))
}
