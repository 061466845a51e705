//! Mock implementation of PasscodeRepository for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::passcode::{PasscodeRecord, Purpose};
use crate::domain::entities::subject::SubjectId;
use crate::errors::DomainError;

use super::PasscodeRepository;

/// Mock implementation of PasscodeRepository for testing
///
/// Mirrors the store's ordering contract: newest by created_at, ties broken
/// by ascending id. Ids are assigned sequentially starting at 1.
pub struct MockPasscodeRepository {
    records: Arc<RwLock<Vec<PasscodeRecord>>>,
    next_id: Arc<RwLock<u64>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockPasscodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Set whether operations should fail
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Get all stored records for testing
    pub async fn all_records(&self) -> Vec<PasscodeRecord> {
        self.records.read().await.clone()
    }

    /// Seed a record directly, bypassing the insert path
    pub async fn seed(&self, mut record: PasscodeRecord) -> u64 {
        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;
        record.id = Some(id);
        self.records.write().await.push(record);
        id
    }

    async fn fail_if_requested(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Internal {
                message: "Mock repository error".to_string(),
            });
        }
        Ok(())
    }

    async fn newest_matching<F>(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
        filter: F,
    ) -> Option<PasscodeRecord>
    where
        F: Fn(&PasscodeRecord) -> bool,
    {
        let records = self.records.read().await;
        let mut matching: Vec<PasscodeRecord> = records
            .iter()
            .filter(|r| r.subject == *subject && r.purpose == purpose && filter(r))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        matching.into_iter().next()
    }
}

impl Default for MockPasscodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasscodeRepository for MockPasscodeRepository {
    async fn find_active(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<Option<PasscodeRecord>, DomainError> {
        self.fail_if_requested().await?;
        Ok(self.newest_matching(subject, purpose, |r| r.is_active()).await)
    }

    async fn find_most_recent(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<Option<PasscodeRecord>, DomainError> {
        self.fail_if_requested().await?;
        Ok(self.newest_matching(subject, purpose, |_| true).await)
    }

    async fn invalidate_active(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<u64, DomainError> {
        self.fail_if_requested().await?;

        let mut records = self.records.write().await;
        let mut invalidated = 0;
        for record in records.iter_mut() {
            if record.subject == *subject && record.purpose == purpose && !record.used {
                record.used = true;
                invalidated += 1;
            }
        }
        Ok(invalidated)
    }

    async fn insert(&self, mut record: PasscodeRecord) -> Result<PasscodeRecord, DomainError> {
        self.fail_if_requested().await?;

        let mut next_id = self.next_id.write().await;
        record.id = Some(*next_id);
        *next_id += 1;

        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn increment_attempts(&self, id: u64) -> Result<i32, DomainError> {
        self.fail_if_requested().await?;

        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == Some(id)) {
            Some(record) => {
                record.attempts += 1;
                Ok(record.attempts)
            }
            None => Err(DomainError::Internal {
                message: format!("Passcode record {} not found", id),
            }),
        }
    }

    async fn mark_used(&self, id: u64) -> Result<(), DomainError> {
        self.fail_if_requested().await?;

        let mut records = self.records.write().await;
        if let Some(record) = records.iter_mut().find(|r| r.id == Some(id)) {
            record.used = true;
        }
        Ok(())
    }
}
