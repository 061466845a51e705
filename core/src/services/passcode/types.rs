//! Types for passcode service results

use chrono::{DateTime, Utc};

/// Result of issuing a passcode
///
/// Carries the plaintext code for the caller's delivery step. The code must
/// never be logged or exported to metrics except in masked form.
#[derive(Debug, Clone)]
pub struct IssueOutcome {
    /// Store-assigned id of the new record
    pub id: u64,
    /// The plaintext code, for delivery to the subject
    pub code: String,
    /// When the code expires
    pub expires_at: DateTime<Utc>,
    /// When the subject may request another code
    pub next_resend_at: DateTime<Utc>,
}

/// Provider-reported status of one delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// Result of dispatching a passcode message
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// Whether the provider accepted the message
    pub status: DeliveryStatus,
    /// Provider message id, when one was assigned
    pub message_id: Option<String>,
}
