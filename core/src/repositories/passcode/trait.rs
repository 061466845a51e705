//! Passcode repository trait defining the interface for passcode persistence.

use async_trait::async_trait;

use crate::domain::entities::passcode::{PasscodeRecord, Purpose};
use crate::domain::entities::subject::SubjectId;
use crate::errors::DomainError;

/// Repository trait for PasscodeRecord persistence operations
///
/// This trait defines the contract for passcode data access. All queries are
/// scoped to one (subject, purpose) pair; "newest" means ordered by
/// created_at descending with ascending store-assigned id as the tie-break.
#[async_trait]
pub trait PasscodeRepository: Send + Sync {
    /// Find the newest active record for a subject and purpose
    ///
    /// Active means not used and not yet expired. Expired records are simply
    /// excluded here; nothing sweeps them.
    ///
    /// # Arguments
    /// * `subject` - The subject the passcode belongs to
    /// * `purpose` - The purpose the passcode was issued for
    ///
    /// # Returns
    /// * `Ok(Some(record))` when an active record exists
    /// * `Ok(None)` when there is none
    async fn find_active(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<Option<PasscodeRecord>, DomainError>;

    /// Find the newest record for a subject and purpose regardless of state
    ///
    /// Used for cooldown checks, so used and expired records count too.
    ///
    /// # Arguments
    /// * `subject` - The subject the passcode belongs to
    /// * `purpose` - The purpose the passcode was issued for
    async fn find_most_recent(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<Option<PasscodeRecord>, DomainError>;

    /// Mark every unused record for a subject and purpose as used
    ///
    /// # Arguments
    /// * `subject` - The subject whose records are superseded
    /// * `purpose` - The purpose being re-issued
    ///
    /// # Returns
    /// * The number of records invalidated
    async fn invalidate_active(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<u64, DomainError>;

    /// Persist a new passcode record
    ///
    /// # Arguments
    /// * `record` - The record to insert, with `id` still unset
    ///
    /// # Returns
    /// * The record with its store-assigned id filled in
    async fn insert(&self, record: PasscodeRecord) -> Result<PasscodeRecord, DomainError>;

    /// Increment the attempt counter of a record
    ///
    /// # Arguments
    /// * `id` - Store-assigned id of the record
    ///
    /// # Returns
    /// * The attempt count after the increment
    async fn increment_attempts(&self, id: u64) -> Result<i32, DomainError>;

    /// Mark a record as used, making its state terminal
    ///
    /// # Arguments
    /// * `id` - Store-assigned id of the record
    async fn mark_used(&self, id: u64) -> Result<(), DomainError>;
}
