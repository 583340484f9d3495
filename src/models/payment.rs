//! Lightning settlement models.

use serde::{Deserialize, Serialize};

/// An invoice as reported by the node's REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub payment_hash: String,
    /// BOLT11 payment request string
    pub payment_request: String,
    #[serde(default)]
    pub amt_paid_sat: u64,
    #[serde(default)]
    pub settled: bool,
    #[serde(default)]
    pub memo: String,
}

/// Outcome of paying an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub payment_hash: String,
    #[serde(default)]
    pub payment_preimage: String,
    /// Node-reported failure reason; empty on success
    #[serde(default)]
    pub payment_error: String,
}
