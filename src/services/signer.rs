//! Hardware signing bridge.
//!
//! Delegates signing to an external trusted-platform-module binary: payload
//! bytes go in hex-encoded, a hex signature comes back on stdout. Sign is
//! the only operation; key generation and on-device verification stay on
//! the hardware side.

use crate::config::SignerConfig;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Errors from the signing bridge
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("failed to launch signer command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("signer exited with {0}")]
    Failed(std::process::ExitStatus),

    #[error("signer produced no usable hex signature")]
    BadOutput,

    #[error("signer timed out after {0} seconds")]
    Timeout(u64),
}

/// Shell-exec bridge to the hardware signer
pub struct HardwareSigner {
    config: SignerConfig,
}

impl HardwareSigner {
    pub fn new(config: SignerConfig) -> Self {
        Self { config }
    }

    /// Sign raw bytes, returning the signature as lowercase hex
    pub async fn sign(&self, payload: &[u8]) -> Result<String, SignerError> {
        let hex_payload = hex::encode(payload);
        debug!(command = %self.config.command, "invoking hardware signer");

        let run = Command::new(&self.config.command)
            .arg("sign")
            .arg(&hex_payload)
            .output();

        let output = tokio::time::timeout(Duration::from_secs(self.config.timeout_seconds), run)
            .await
            .map_err(|_| SignerError::Timeout(self.config.timeout_seconds))??;

        if !output.status.success() {
            return Err(SignerError::Failed(output.status));
        }

        let signature = String::from_utf8(output.stdout)
            .map_err(|_| SignerError::BadOutput)?
            .trim()
            .to_lowercase();

        if signature.is_empty() || hex::decode(&signature).is_err() {
            return Err(SignerError::BadOutput);
        }

        Ok(signature)
    }
}
