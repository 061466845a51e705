//! Mock implementations for testing the passcode services

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::subject::SubjectId;
use crate::errors::DomainError;
use crate::repositories::subject::{ContactChannel, SubjectPartition, SubjectStore};
use crate::services::passcode::traits::{DeliveryDispatcher, MetricsSink};
use crate::services::passcode::types::{DeliveryReceipt, DeliveryStatus};

// Mock delivery dispatcher for testing
pub struct MockDispatcher {
    pub sent_sms: Arc<Mutex<Vec<(String, String)>>>,
    pub sent_emails: Arc<Mutex<Vec<(String, String)>>>,
    pub should_fail: bool,
    pub should_reject: bool,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self {
            sent_sms: Arc::new(Mutex::new(Vec::new())),
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
            should_reject: false,
        }
    }

    /// Dispatcher whose sends error at the transport level
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// Dispatcher whose provider rejects every message
    pub fn rejecting() -> Self {
        Self {
            should_reject: true,
            ..Self::new()
        }
    }

    pub fn last_sms(&self) -> Option<(String, String)> {
        self.sent_sms.lock().unwrap().last().cloned()
    }

    pub fn last_email(&self) -> Option<(String, String)> {
        self.sent_emails.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DeliveryDispatcher for MockDispatcher {
    async fn send_sms(&self, contact: &str, message: &str) -> Result<DeliveryReceipt, String> {
        if self.should_fail {
            return Err("SMS transport error".to_string());
        }
        if self.should_reject {
            return Ok(DeliveryReceipt {
                status: DeliveryStatus::Failed,
                message_id: None,
            });
        }
        self.sent_sms
            .lock()
            .unwrap()
            .push((contact.to_string(), message.to_string()));
        Ok(DeliveryReceipt {
            status: DeliveryStatus::Sent,
            message_id: Some(format!("mock-sms-{}", uuid::Uuid::new_v4())),
        })
    }

    async fn send_email(
        &self,
        contact: &str,
        _subject: &str,
        body: &str,
    ) -> Result<DeliveryReceipt, String> {
        if self.should_fail {
            return Err("Email transport error".to_string());
        }
        if self.should_reject {
            return Ok(DeliveryReceipt {
                status: DeliveryStatus::Failed,
                message_id: None,
            });
        }
        self.sent_emails
            .lock()
            .unwrap()
            .push((contact.to_string(), body.to_string()));
        Ok(DeliveryReceipt {
            status: DeliveryStatus::Sent,
            message_id: Some(format!("mock-email-{}", uuid::Uuid::new_v4())),
        })
    }
}

// Recording metrics sink for testing
pub struct RecordingMetrics {
    pub events: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn count(&self, category: &str, outcome: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, o)| c == category && o == outcome)
            .count()
    }
}

impl MetricsSink for RecordingMetrics {
    fn track_event(&self, category: &str, outcome: &str, _dimensions: &[(&str, &str)]) {
        self.events
            .lock()
            .unwrap()
            .push((category.to_string(), outcome.to_string()));
    }
}

// Subject store that only counts calls, for interaction tests
pub struct CountingSubjectStore {
    pub calls: Arc<Mutex<u32>>,
}

impl CountingSubjectStore {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl SubjectStore for CountingSubjectStore {
    async fn mark_verified(
        &self,
        _partition: SubjectPartition,
        _subject: &SubjectId,
        _channel: ContactChannel,
    ) -> Result<bool, DomainError> {
        *self.calls.lock().unwrap() += 1;
        Ok(false)
    }
}
