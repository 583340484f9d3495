//! Task broker REST client with backoff polling.

use crate::{
    config::{Environment, TaskClientConfig},
    models::{TaskRecord, TaskRequest},
};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio_retry::{
    Retry,
    strategy::{ExponentialBackoff, jitter},
};
use tracing::{debug, info};
use uuid::Uuid;

/// Errors from the broker client
#[derive(Debug, thiserror::Error)]
pub enum TaskClientError {
    #[error("broker request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("broker returned status {0}")]
    Status(StatusCode),

    #[error("could not decode broker response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("task {0} did not reach a terminal status in time")]
    Timeout(Uuid),
}

/// Outbound client for broadcasting tasks and polling their status
pub struct TaskClient {
    http: Client,
    base_url: String,
    config: TaskClientConfig,
}

impl TaskClient {
    /// Create a client against the broker for the given environment
    pub fn new(environment: Environment, config: TaskClientConfig) -> Result<Self, TaskClientError> {
        Self::with_base_url(environment.broker_url(), config)
    }

    /// Create a client against an explicit broker URL
    pub fn with_base_url(
        base_url: impl Into<String>,
        config: TaskClientConfig,
    ) -> Result<Self, TaskClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            config,
        })
    }

    /// Broadcast a task to the network
    pub async fn broadcast(&self, request: &TaskRequest) -> Result<TaskRecord, TaskClientError> {
        let url = format!("{}/v1/tasks", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(TaskClientError::Status(response.status()));
        }

        let body = response.text().await?;
        let record: TaskRecord = serde_json::from_str(&body)?;
        info!(task_id = %record.id, "task broadcast");
        Ok(record)
    }

    /// Fetch the current state of a task once
    pub async fn poll(&self, task_id: Uuid) -> Result<TaskRecord, TaskClientError> {
        let url = format!("{}/v1/tasks/{}", self.base_url, task_id);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(TaskClientError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Poll a task until it reaches a terminal status.
    ///
    /// Uses exponential backoff with jitter between polls, capped at the
    /// configured per-attempt maximum, and gives up with
    /// [`TaskClientError::Timeout`] once `poll_max_attempts` polls have run.
    pub async fn wait_for_completion(&self, task_id: Uuid) -> Result<TaskRecord, TaskClientError> {
        // The strategy counts retries after the first poll, so the budget is
        // attempts minus one; a budget of zero still polls once.
        let strategy = ExponentialBackoff::from_millis(self.config.poll_base_delay_ms)
            .max_delay(Duration::from_secs(self.config.poll_max_delay_seconds))
            .map(jitter)
            .take(self.config.poll_max_attempts.saturating_sub(1));

        let result = Retry::spawn(strategy, || self.poll_terminal(task_id)).await;

        result.map_err(|e| match e {
            PollOutcome::NotReady => TaskClientError::Timeout(task_id),
            PollOutcome::Client(inner) => inner,
        })
    }

    async fn poll_terminal(&self, task_id: Uuid) -> Result<TaskRecord, PollOutcome> {
        let record = self.poll(task_id).await.map_err(PollOutcome::Client)?;

        if record.status.is_terminal() {
            Ok(record)
        } else {
            debug!(task_id = %task_id, status = ?record.status, "task not terminal yet");
            Err(PollOutcome::NotReady)
        }
    }
}

/// Internal retry signal: keep polling, or fail out with a client error
#[derive(Debug)]
enum PollOutcome {
    NotReady,
    Client(TaskClientError),
}
