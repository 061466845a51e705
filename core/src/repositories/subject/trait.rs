//! Subject store trait for verification-flag updates across partitions.

use async_trait::async_trait;

use crate::domain::entities::subject::SubjectId;
use crate::errors::DomainError;

/// Storage partitions subjects can live in
///
/// A subject exists in at most one partition. Lookups probe them in the
/// order given by [`SubjectPartition::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectPartition {
    Riders,
    Drivers,
}

impl SubjectPartition {
    /// Probe order for cross-partition lookups
    pub fn all() -> [SubjectPartition; 2] {
        [SubjectPartition::Riders, SubjectPartition::Drivers]
    }

    /// Storage name of the partition
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectPartition::Riders => "riders",
            SubjectPartition::Drivers => "drivers",
        }
    }
}

impl std::fmt::Display for SubjectPartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact channel a verification applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    Phone,
}

impl ContactChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactChannel::Email => "email",
            ContactChannel::Phone => "phone",
        }
    }
}

/// Store trait for subject rows living in the partition tables
#[async_trait]
pub trait SubjectStore: Send + Sync {
    /// Mark a subject's contact channel as verified within one partition
    ///
    /// Sets the channel-specific flag, the overall verified flag, and the
    /// update timestamp in a single write.
    ///
    /// # Arguments
    /// * `partition` - The partition to update
    /// * `subject` - The subject to update
    /// * `channel` - Which contact channel was verified
    ///
    /// # Returns
    /// * `Ok(true)` when the subject existed in the partition and was updated
    /// * `Ok(false)` when the partition has no such subject
    async fn mark_verified(
        &self,
        partition: SubjectPartition,
        subject: &SubjectId,
        channel: ContactChannel,
    ) -> Result<bool, DomainError>;
}
