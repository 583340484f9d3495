//! Lightning payment-node configuration.

use crate::config::Environment;
use std::env;

/// Connection settings for the Lightning node's REST API
#[derive(Clone)]
pub struct PaymentConfig {
    pub base_url: String,
    /// Hex-encoded macaroon credential sent with every request
    pub macaroon_hex: String,
    pub request_timeout_seconds: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            base_url: Environment::Sandbox.node_url(),
            macaroon_hex: String::new(),
            request_timeout_seconds: 30,
        }
    }
}

impl PaymentConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let base_url = Environment::from_env().node_url();

        let macaroon_hex = env::var("LND_MACAROON_HEX").unwrap_or_default();

        let request_timeout_seconds = env::var("LND_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            macaroon_hex,
            request_timeout_seconds,
        }
    }
}
