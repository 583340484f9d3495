//! Metrics collection and Prometheus integration service.

use prometheus::{CounterVec, Opts, Registry, TextEncoder};

/// Application metrics collector for Prometheus integration
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub webhook_verifications_total: CounterVec,
    pub app_info: CounterVec,
}

impl AppMetrics {
    /// Create a new metrics collector with default Prometheus metrics
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        // Webhook verification outcomes; "accepted" plus one label per
        // rejection reason, so a replay flood and a buggy sender show up as
        // different series
        let webhook_verifications_total = CounterVec::new(
            Opts::new(
                "webhook_verifications_total",
                "Webhook verification outcomes",
            ),
            &["outcome"],
        )?;

        // Application info counter
        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        registry.register(Box::new(webhook_verifications_total.clone()))?;
        registry.register(Box::new(app_info.clone()))?;

        app_info
            .with_label_values(&[
                env!("CARGO_PKG_VERSION"),
                option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
                option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
            ])
            .inc();

        Ok(Self {
            registry,
            webhook_verifications_total,
            app_info,
        })
    }

    /// Record a webhook verification outcome
    pub fn record_webhook_outcome(&self, outcome: &str) {
        self.webhook_verifications_total
            .with_label_values(&[outcome])
            .inc();
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder.encode_to_string(&metric_families)
    }
}
