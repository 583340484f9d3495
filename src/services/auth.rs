//! Inbound webhook authentication glue for actix handlers.

use crate::{
    config::WebhookConfig,
    webhook::{self, VerifyError},
};
use actix_web::{HttpRequest, HttpResponse};
use tracing::warn;

/// Why an inbound webhook request was turned away before dispatch.
///
/// The HTTP response is deliberately uniform across variants; the
/// distinction exists only for server-side logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookRejection {
    MissingSignatureHeader,
    MissingTimestampHeader,
    Verify(VerifyError),
}

impl WebhookRejection {
    /// Label used for the rejection metric
    pub fn metric_label(&self) -> &'static str {
        match self {
            WebhookRejection::MissingSignatureHeader => "missing_signature",
            WebhookRejection::MissingTimestampHeader => "missing_timestamp",
            WebhookRejection::Verify(VerifyError::MalformedTimestamp) => "malformed_timestamp",
            WebhookRejection::Verify(VerifyError::StaleOrFutureTimestamp) => "stale_timestamp",
            WebhookRejection::Verify(VerifyError::MalformedSignature) => "malformed_signature",
            WebhookRejection::Verify(VerifyError::SignatureMismatch) => "signature_mismatch",
        }
    }

    /// Uniform 401 body; never reveals which check failed
    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Unauthorized",
            "message": "Invalid webhook signature"
        }))
    }
}

/// Validate the signature and timestamp headers of an inbound webhook
/// against the raw body bytes.
///
/// Skipped entirely when the config does not require signatures (local
/// development). Rejection reasons are logged at `warn` level without the
/// secret, the digest, or the body.
pub fn check_webhook_signature(
    req: &HttpRequest,
    raw_body: &[u8],
    config: &WebhookConfig,
) -> Result<(), WebhookRejection> {
    if !config.require_signature {
        return Ok(());
    }

    let signature = req
        .headers()
        .get("X-Signature")
        .and_then(|h| h.to_str().ok())
        .ok_or(WebhookRejection::MissingSignatureHeader)?;

    let timestamp = req
        .headers()
        .get("X-Timestamp")
        .and_then(|h| h.to_str().ok())
        .ok_or(WebhookRejection::MissingTimestampHeader)?;

    webhook::verify_with_options(
        raw_body,
        signature,
        timestamp,
        config.secret.as_bytes(),
        config.tolerance_seconds,
        config.encoding,
    )
    .map_err(|e| {
        warn!(reason = %e, "rejected inbound webhook");
        WebhookRejection::Verify(e)
    })
}
