//! Taskproxy - client SDK and local sandbox for a task-brokering network
//!
//! Requesters broadcast paid tasks, workers complete them, settlement runs
//! over Lightning, and lifecycle events come back as signed HTTP webhooks.
//! This crate provides:
//! - Webhook signature verification (HMAC-SHA256 over `"{timestamp}.{body}"`
//!   with a replay tolerance window and constant-time comparison)
//! - A broker client with exponential-backoff polling
//! - A Lightning payment-node REST wrapper
//! - A hardware signing bridge
//! - An in-memory sandbox server for local development
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `webhook/` - The verification core; the crate's security boundary
//! - `models/` - Data structures and request/response models
//! - `handlers/` - HTTP request handlers for the sandbox server
//! - `services/` - Clients, signing bridge, rewards, and metrics
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use taskproxy::webhook;
//!
//! let secret = b"whsec_example";
//! let body = br#"{"event":"task.completed"}"#;
//! let outcome = webhook::verify(body, "deadbeef", "1700000000", secret);
//! assert!(outcome.is_err());
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod webhook;

// Re-export commonly used types and functions for convenience
pub use config::{Environment, PaymentConfig, SignerConfig, TaskClientConfig, WebhookConfig};
pub use handlers::{
    SandboxState, create_sandbox_app, create_sandbox_app_with, create_task, get_metrics, get_task,
    health, receive_task_event, version,
};
pub use models::{
    HealthResponse, Invoice, PaymentResult, TaskRecord, TaskRequest, TaskStatus, VersionResponse,
    WebhookEvent,
};
pub use services::{
    AppMetrics, HardwareSigner, LightningClient, PaymentError, RewardSplit, SignerError,
    TaskClient, TaskClientError, WebhookRejection, check_webhook_signature, split_reward,
};
pub use webhook::{
    DEFAULT_TOLERANCE_SECONDS, SignatureEncoding, VerifyError, verify, verify_at,
    verify_with_options,
};
