//! Inbound webhook receiver.
//!
//! Verification happens against the raw body bytes exactly as they arrived;
//! the JSON envelope is parsed only after the signature is accepted.

use crate::{
    config::WebhookConfig,
    models::WebhookEvent,
    services::{AppMetrics, check_webhook_signature},
};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

/// Receive a signed task lifecycle event
///
/// Any rejection maps to a uniform 401; the specific reason is only visible
/// in logs and metrics.
pub async fn receive_task_event(req: HttpRequest, raw_body: web::Bytes) -> HttpResponse {
    let Some(config) = req.app_data::<web::Data<WebhookConfig>>() else {
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Internal Server Error",
            "message": "Webhook configuration missing"
        }));
    };

    let metrics = req.app_data::<web::Data<AppMetrics>>();

    if let Err(rejection) = check_webhook_signature(&req, &raw_body, config) {
        if let Some(metrics) = metrics {
            metrics.record_webhook_outcome(rejection.metric_label());
        }
        return rejection.to_response();
    }

    if let Some(metrics) = metrics {
        metrics.record_webhook_outcome("accepted");
    }

    let event: WebhookEvent = match serde_json::from_slice(&raw_body) {
        Ok(event) => event,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Bad Request",
                "message": "Body is not a valid event envelope"
            }));
        }
    };

    info!(event = %event.event, "webhook accepted");

    HttpResponse::Ok().json(serde_json::json!({
        "received": true,
        "event": event.event
    }))
}
