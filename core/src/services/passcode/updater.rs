//! Best-effort subject verification flag updates

use std::sync::Arc;

use pl_shared::utils::contact::{looks_like_email, mask_contact};

use crate::domain::entities::subject::SubjectId;
use crate::repositories::subject::{ContactChannel, SubjectPartition, SubjectStore};

/// Propagates a successful contact verification onto the subject row
///
/// Runs only after a verification-purpose passcode check succeeds. The
/// update is strictly best-effort: every failure is logged and swallowed so
/// it can never reverse a verification outcome that already happened.
pub struct SubjectVerificationUpdater<S: SubjectStore> {
    /// Subject store spanning the partition tables
    store: Arc<S>,
}

impl<S: SubjectStore> SubjectVerificationUpdater<S> {
    /// Create a new updater
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Mark the subject's contact channel verified, probing partitions in order
    ///
    /// The channel is inferred from the stored contact identifier; an absent
    /// contact is treated as a phone verification.
    ///
    /// # Arguments
    ///
    /// * `subject` - The subject that completed verification
    /// * `contact` - The contact identifier the passcode was delivered to
    pub async fn apply(&self, subject: &SubjectId, contact: Option<&str>) {
        // Temporary subjects have no partition row yet
        if subject.is_temporary() {
            tracing::debug!(
                subject = %subject,
                event = "subject_update_skipped",
                "Skipping verification flag update for temporary subject"
            );
            return;
        }

        let channel = match contact {
            Some(contact) if looks_like_email(contact) => ContactChannel::Email,
            _ => ContactChannel::Phone,
        };

        for partition in SubjectPartition::all() {
            match self.store.mark_verified(partition, subject, channel).await {
                Ok(true) => {
                    tracing::info!(
                        subject = %subject,
                        partition = %partition,
                        channel = channel.as_str(),
                        contact = contact.map(mask_contact).as_deref().unwrap_or("-"),
                        event = "subject_verified",
                        "Marked subject contact channel as verified"
                    );
                    return;
                }
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!(
                        subject = %subject,
                        partition = %partition,
                        error = %e,
                        event = "subject_update_failed",
                        "Failed to update verification flags, continuing"
                    );
                }
            }
        }

        tracing::warn!(
            subject = %subject,
            event = "subject_not_found",
            "Subject not present in any partition, verification flags unchanged"
        );
    }
}
