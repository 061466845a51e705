//! Metrics sink that forwards events into the tracing pipeline
//!
//! Counter-style events become structured log lines under the `metrics`
//! target. That is enough for development and for log-based metric
//! extraction in deployment; a real time-series backend would implement
//! the same trait.

use tracing::info;

use pl_core::services::passcode::MetricsSink;

/// Sink that emits every tracked event as a structured log line
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMetricsSink;

impl TracingMetricsSink {
    /// Create a new tracing-backed sink
    pub fn new() -> Self {
        Self
    }
}

impl MetricsSink for TracingMetricsSink {
    fn track_event(&self, category: &str, outcome: &str, dimensions: &[(&str, &str)]) {
        if dimensions.is_empty() {
            info!(
                target: "metrics",
                category = category,
                outcome = outcome,
                "Tracked event"
            );
            return;
        }

        let labels = dimensions
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(",");
        info!(
            target: "metrics",
            category = category,
            outcome = outcome,
            labels = %labels,
            "Tracked event"
        );
    }
}
