//! Mock delivery dispatcher
//!
//! A dispatcher for development and testing that logs messages to the
//! console instead of handing them to a real SMS or email provider.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use pl_core::services::passcode::{DeliveryDispatcher, DeliveryReceipt, DeliveryStatus};
use pl_shared::utils::mask_contact;

/// Mock delivery dispatcher for development and testing
///
/// This implementation:
/// - Logs outgoing messages to console
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockDeliveryDispatcher {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockDeliveryDispatcher {
    /// Create a new mock dispatcher
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock dispatcher with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }

    fn next_receipt(&self, channel: &str, contact: &str, body_len: usize) -> DeliveryReceipt {
        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK DELIVERY - {} MESSAGE #{}", channel.to_uppercase(), count);
            println!("{}", "=".repeat(60));
            println!("To: {}", contact);
            println!("Message ID: {}", message_id);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            channel = channel,
            contact = %mask_contact(contact),
            message_id = %message_id,
            message_length = body_len,
            "Message sent (mock)"
        );

        DeliveryReceipt {
            status: DeliveryStatus::Sent,
            message_id: Some(message_id),
        }
    }
}

impl Default for MockDeliveryDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryDispatcher for MockDeliveryDispatcher {
    async fn send_sms(&self, contact: &str, message: &str) -> Result<DeliveryReceipt, String> {
        if self.simulate_failure {
            warn!(
                contact = %mask_contact(contact),
                "Mock dispatcher simulating SMS failure"
            );
            return Err("Simulated SMS delivery failure".to_string());
        }

        if self.console_output {
            println!("SMS content: {}", message);
        }
        Ok(self.next_receipt("sms", contact, message.len()))
    }

    async fn send_email(
        &self,
        contact: &str,
        subject: &str,
        body: &str,
    ) -> Result<DeliveryReceipt, String> {
        if self.simulate_failure {
            warn!(
                contact = %mask_contact(contact),
                "Mock dispatcher simulating email failure"
            );
            return Err("Simulated email delivery failure".to_string());
        }

        if self.console_output {
            println!("Email subject: {}", subject);
            println!("Email body: {}", body);
        }
        Ok(self.next_receipt("email", contact, body.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sms_send_success() {
        let dispatcher = MockDeliveryDispatcher::with_options(false, false);
        let receipt = dispatcher
            .send_sms("+1234567890", "Your Passlane code is 123456.")
            .await
            .unwrap();

        assert_eq!(receipt.status, DeliveryStatus::Sent);
        assert!(receipt.message_id.unwrap().starts_with("mock_"));
        assert_eq!(dispatcher.message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_email_send_success() {
        let dispatcher = MockDeliveryDispatcher::with_options(false, false);
        let receipt = dispatcher
            .send_email("rider@example.com", "Your Passlane code", "123456")
            .await
            .unwrap();

        assert_eq!(receipt.status, DeliveryStatus::Sent);
        assert_eq!(dispatcher.message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_simulate_failure() {
        let mut dispatcher = MockDeliveryDispatcher::with_options(false, false);
        dispatcher.set_simulate_failure(true);

        let result = dispatcher.send_sms("+1234567890", "code").await;
        assert!(result.is_err());
        assert_eq!(dispatcher.message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_counter() {
        let dispatcher = MockDeliveryDispatcher::with_options(false, false);

        for i in 1..=3 {
            let _ = dispatcher
                .send_sms("+1234567890", &format!("Message {}", i))
                .await;
            assert_eq!(dispatcher.message_count(), i);
        }

        dispatcher.reset_counter();
        assert_eq!(dispatcher.message_count(), 0);
    }
}
