//! Webhook verification configuration.

use crate::webhook::{DEFAULT_TOLERANCE_SECONDS, SignatureEncoding};
use std::env;

/// Configuration for inbound webhook verification
#[derive(Clone)]
pub struct WebhookConfig {
    /// Shared secret, `whsec_...` by convention but opaque bytes here
    pub secret: String,
    pub tolerance_seconds: u64,
    pub require_signature: bool,
    pub encoding: SignatureEncoding,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            secret: "whsec_sandbox".to_string(),
            tolerance_seconds: DEFAULT_TOLERANCE_SECONDS,
            require_signature: true,
            encoding: SignatureEncoding::Hex,
        }
    }
}

impl WebhookConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let secret =
            env::var("WEBHOOK_SECRET").unwrap_or_else(|_| "whsec_sandbox".to_string());

        let tolerance_seconds = env::var("WEBHOOK_TIMESTAMP_TOLERANCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOLERANCE_SECONDS);

        let require_signature = env::var("WEBHOOK_REQUIRE_SIGNATURE")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let encoding = match env::var("WEBHOOK_SIGNATURE_ENCODING").as_deref() {
            Ok("raw") => SignatureEncoding::Utf8Raw,
            _ => SignatureEncoding::Hex,
        };

        Self {
            secret,
            tolerance_seconds,
            require_signature,
            encoding,
        }
    }
}
