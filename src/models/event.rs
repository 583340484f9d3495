//! Webhook event envelope.
//!
//! Parsed only after the signature over the raw body has been accepted; the
//! verification layer never looks inside the payload.

use crate::models::TaskStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task lifecycle event delivered as a signed webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event name, e.g. `task.completed`
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Event-specific payload, opaque to the envelope
    #[serde(default)]
    pub data: serde_json::Value,
}
