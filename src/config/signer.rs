//! Hardware signing bridge configuration.

use std::env;

/// Location of the external trusted-platform-module signer binary
#[derive(Clone)]
pub struct SignerConfig {
    /// Command to execute for signing requests
    pub command: String,
    pub timeout_seconds: u64,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            command: "tpm-signer".to_string(),
            timeout_seconds: 15,
        }
    }
}

impl SignerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let command = env::var("TPM_SIGNER_CMD").unwrap_or_else(|_| "tpm-signer".to_string());

        let timeout_seconds = env::var("TPM_SIGNER_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        Self {
            command,
            timeout_seconds,
        }
    }
}
