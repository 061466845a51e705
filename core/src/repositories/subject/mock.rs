//! Mock implementation of SubjectStore for testing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::subject::SubjectId;
use crate::errors::DomainError;

use super::{ContactChannel, SubjectPartition, SubjectStore};

/// Verification flags of one mock subject row
#[derive(Debug, Clone, Default)]
pub struct MockSubjectRow {
    pub email_verified: bool,
    pub phone_verified: bool,
    pub verified: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Mock implementation of SubjectStore for testing
pub struct MockSubjectStore {
    rows: Arc<RwLock<HashMap<(SubjectPartition, String), MockSubjectRow>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockSubjectStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Set whether operations should fail
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Seed a subject into a partition with unverified flags
    pub async fn seed_subject(&self, partition: SubjectPartition, subject: &SubjectId) {
        self.rows
            .write()
            .await
            .insert((partition, subject.to_string()), MockSubjectRow::default());
    }

    /// Fetch the current flags of a seeded subject
    pub async fn row(
        &self,
        partition: SubjectPartition,
        subject: &SubjectId,
    ) -> Option<MockSubjectRow> {
        self.rows
            .read()
            .await
            .get(&(partition, subject.to_string()))
            .cloned()
    }
}

impl Default for MockSubjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubjectStore for MockSubjectStore {
    async fn mark_verified(
        &self,
        partition: SubjectPartition,
        subject: &SubjectId,
        channel: ContactChannel,
    ) -> Result<bool, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Internal {
                message: "Mock subject store error".to_string(),
            });
        }

        let mut rows = self.rows.write().await;
        match rows.get_mut(&(partition, subject.to_string())) {
            Some(row) => {
                match channel {
                    ContactChannel::Email => row.email_verified = true,
                    ContactChannel::Phone => row.phone_verified = true,
                }
                row.verified = true;
                row.updated_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
