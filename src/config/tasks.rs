//! Task broker client configuration.

use std::env;

/// Tuning knobs for the broker client's requests and polling loop
#[derive(Debug, Clone)]
pub struct TaskClientConfig {
    /// Per-request timeout (in seconds)
    pub request_timeout_seconds: u64,

    /// Base delay for the exponential polling backoff (in milliseconds)
    pub poll_base_delay_ms: u64,

    /// Hard cap on a single inter-poll delay (in seconds)
    pub poll_max_delay_seconds: u64,

    /// Total poll budget before giving up; at least one poll always runs
    pub poll_max_attempts: usize,
}

impl Default for TaskClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: 10,
            poll_base_delay_ms: 250,
            poll_max_delay_seconds: 30,
            poll_max_attempts: 20,
        }
    }
}

impl TaskClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            request_timeout_seconds: parse_var(
                "TASK_CLIENT_REQUEST_TIMEOUT",
                defaults.request_timeout_seconds,
            ),
            poll_base_delay_ms: parse_var("TASK_CLIENT_POLL_BASE_MS", defaults.poll_base_delay_ms),
            poll_max_delay_seconds: parse_var(
                "TASK_CLIENT_POLL_MAX_DELAY",
                defaults.poll_max_delay_seconds,
            ),
            poll_max_attempts: parse_var(
                "TASK_CLIENT_POLL_MAX_ATTEMPTS",
                defaults.poll_max_attempts,
            ),
        }
    }
}

fn parse_var<T: std::str::FromStr>(var: &str, default: T) -> T {
    env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
