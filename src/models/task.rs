//! Task lifecycle models shared by the broker client and the sandbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a broadcast task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    Expired,
}

impl TaskStatus {
    /// A terminal status ends the polling loop
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed | TaskStatus::Expired
        )
    }
}

/// Request model for broadcasting a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Human-readable description of the work
    pub description: String,
    /// Total reward on completion, in satoshis
    pub reward_sats: u64,
    /// Worker tip as a percentage of the reward after fees (0-100)
    #[serde(default)]
    pub tip_percent: u8,
    /// Where signed lifecycle webhooks should be delivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// A task as the broker reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Uuid,
    pub status: TaskStatus,
    pub description: String,
    pub reward_sats: u64,
    pub created_at: DateTime<Utc>,
    /// Worker-submitted result, present once the task completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}
