//! Lightning payment-node REST wrapper.
//!
//! Thin client over the node's REST API. Settlement is not idempotent from
//! this layer's point of view, so there is deliberately no retry logic.

use crate::{
    config::PaymentConfig,
    models::{Invoice, PaymentResult},
};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::info;

/// Errors from the payment-node client
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("node request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("node returned status {0}")]
    Status(StatusCode),

    #[error("could not decode node response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("payment rejected by node: {0}")]
    Rejected(String),
}

/// Client for paying and looking up invoices on a Lightning node
pub struct LightningClient {
    http: Client,
    config: PaymentConfig,
}

impl LightningClient {
    pub fn new(config: PaymentConfig) -> Result<Self, PaymentError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self { http, config })
    }

    /// Pay a BOLT11 invoice
    pub async fn pay_invoice(&self, payment_request: &str) -> Result<PaymentResult, PaymentError> {
        let url = format!("{}/v1/channels/transactions", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .header("Grpc-Metadata-macaroon", &self.config.macaroon_hex)
            .json(&serde_json::json!({ "payment_request": payment_request }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PaymentError::Status(response.status()));
        }

        let body = response.text().await?;
        let result: PaymentResult = serde_json::from_str(&body)?;

        if !result.payment_error.is_empty() {
            return Err(PaymentError::Rejected(result.payment_error));
        }

        info!(payment_hash = %result.payment_hash, "invoice paid");
        Ok(result)
    }

    /// Look up an invoice by its payment hash (hex)
    pub async fn lookup_invoice(&self, payment_hash: &str) -> Result<Invoice, PaymentError> {
        let url = format!("{}/v1/invoice/{}", self.config.base_url, payment_hash);

        let response = self
            .http
            .get(&url)
            .header("Grpc-Metadata-macaroon", &self.config.macaroon_hex)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PaymentError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
