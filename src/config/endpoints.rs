//! Environment-to-endpoint mapping for the task broker and payment node.

use std::env;
use tracing::warn;
use url::Url;

/// Deployment environment the clients talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    /// Resolve the environment from `TASKPROXY_ENV`, defaulting to sandbox
    pub fn from_env() -> Self {
        match env::var("TASKPROXY_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Sandbox,
        }
    }

    /// Base URL of the task broker API
    pub fn broker_url(&self) -> String {
        let default = match self {
            Environment::Production => "https://broker.taskproxy.net",
            Environment::Sandbox => "http://127.0.0.1:8080",
        };
        override_or("BROKER_URL", default)
    }

    /// Base URL of the Lightning node REST API
    pub fn node_url(&self) -> String {
        let default = match self {
            Environment::Production => "https://localhost:8180",
            Environment::Sandbox => "https://localhost:8181",
        };
        override_or("LND_REST_URL", default)
    }
}

/// Use the env override when it is a well-formed URL, the default otherwise
fn override_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) => {
            if Url::parse(&value).is_ok() {
                value.trim_end_matches('/').to_string()
            } else {
                warn!(var, "ignoring malformed URL override");
                default.to_string()
            }
        }
        Err(_) => default.to_string(),
    }
}
