//! MySQL subject store
//!
//! Updates verification flags on subject rows. Subjects live in one of two
//! partition tables (`riders`, `drivers`); callers probe partitions in
//! order and this store reports whether the row existed.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use pl_core::domain::entities::subject::SubjectId;
use pl_core::errors::DomainError;
use pl_core::repositories::{ContactChannel, SubjectPartition, SubjectStore};

use crate::store::StoreSession;

/// MySQL-backed subject store over the partition tables
pub struct MySqlSubjectStore {
    /// Shared store session
    session: Arc<StoreSession>,
}

impl MySqlSubjectStore {
    /// Create a new subject store on top of a store session
    pub fn new(session: Arc<StoreSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SubjectStore for MySqlSubjectStore {
    async fn mark_verified(
        &self,
        partition: SubjectPartition,
        subject: &SubjectId,
        channel: ContactChannel,
    ) -> Result<bool, DomainError> {
        let handle = self.session.acquire().await?;
        let pool = match handle.pool() {
            Some(pool) => pool.clone(),
            None => {
                debug!(
                    subject = %subject,
                    partition = %partition,
                    "Degraded store: verification flags not persisted"
                );
                return Ok(true);
            }
        };

        // Table and column names come from closed enums, never from input.
        let column = match channel {
            ContactChannel::Email => "email_verified",
            ContactChannel::Phone => "phone_verified",
        };
        let query = format!(
            "UPDATE {} SET {} = TRUE, verified = TRUE, updated_at = NOW() WHERE id = ?",
            partition.as_str(),
            column
        );

        let result = self
            .session
            .execute_timed("subject_mark_verified", None, async {
                sqlx::query(&query)
                    .bind(subject.to_string())
                    .execute(&pool)
                    .await
            })
            .await?;

        if result.rows_affected() > 0 {
            info!(
                subject = %subject,
                partition = %partition,
                channel = channel.as_str(),
                "Marked subject contact channel verified"
            );
            Ok(true)
        } else {
            debug!(
                subject = %subject,
                partition = %partition,
                "Subject not present in partition"
            );
            Ok(false)
        }
    }
}
