//! Traits for delivery and metrics integration

use async_trait::async_trait;

use super::types::DeliveryReceipt;

/// Trait for passcode delivery integration
#[async_trait]
pub trait DeliveryDispatcher: Send + Sync {
    /// Send a passcode message via SMS
    async fn send_sms(&self, contact: &str, message: &str) -> Result<DeliveryReceipt, String>;
    /// Send a passcode message via email
    async fn send_email(
        &self,
        contact: &str,
        subject: &str,
        body: &str,
    ) -> Result<DeliveryReceipt, String>;
}

/// Trait for metrics sinks
///
/// Implementations must never block and never fail the calling flow.
pub trait MetricsSink: Send + Sync {
    /// Record one counter-style event
    ///
    /// # Arguments
    /// * `category` - Event family, e.g. `passcode_issue`
    /// * `outcome` - What happened, e.g. `issued` or `rate_limited`
    /// * `dimensions` - Low-cardinality key/value labels
    fn track_event(&self, category: &str, outcome: &str, dimensions: &[(&str, &str)]);
}
