//! MySQL passcode repository
//!
//! Persists passcode records in the `passcodes` table. Every query goes
//! through the resilient store session; when the session has degraded,
//! reads come back empty and writes report success without persisting.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use std::sync::Arc;
use tracing::{debug, info, warn};

use pl_core::domain::entities::passcode::{PasscodeRecord, Purpose};
use pl_core::domain::entities::subject::SubjectId;
use pl_core::errors::{DomainError, DomainResult};
use pl_core::repositories::PasscodeRepository;

use crate::store::StoreSession;

/// Sentinel id reported for inserts absorbed by the degraded store
const DEGRADED_INSERT_ID: u64 = 0;

/// MySQL-backed passcode repository
pub struct MySqlPasscodeRepository {
    /// Shared store session
    session: Arc<StoreSession>,
}

impl MySqlPasscodeRepository {
    /// Create a new passcode repository on top of a store session
    pub fn new(session: Arc<StoreSession>) -> Self {
        Self { session }
    }

    /// Map a result row onto a record for the queried subject and purpose
    fn row_to_record(
        row: &MySqlRow,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> DomainResult<PasscodeRecord> {
        Ok(PasscodeRecord {
            id: Some(row.try_get::<u64, _>("id").map_err(|e| {
                DomainError::Internal {
                    message: format!("Failed to get id: {}", e),
                }
            })?),
            subject: subject.clone(),
            purpose,
            code: row.try_get("code").map_err(|e| DomainError::Internal {
                message: format!("Failed to get code: {}", e),
            })?,
            contact: row.try_get("contact").map_err(|e| DomainError::Internal {
                message: format!("Failed to get contact: {}", e),
            })?,
            issued_at: row.try_get("issued_at").map_err(|e| DomainError::Internal {
                message: format!("Failed to get issued_at: {}", e),
            })?,
            expires_at: row.try_get("expires_at").map_err(|e| DomainError::Internal {
                message: format!("Failed to get expires_at: {}", e),
            })?,
            used: row.try_get("used").map_err(|e| DomainError::Internal {
                message: format!("Failed to get used: {}", e),
            })?,
            attempts: row.try_get("attempts").map_err(|e| DomainError::Internal {
                message: format!("Failed to get attempts: {}", e),
            })?,
            created_at: row.try_get("created_at").map_err(|e| DomainError::Internal {
                message: format!("Failed to get created_at: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl PasscodeRepository for MySqlPasscodeRepository {
    async fn find_active(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<Option<PasscodeRecord>, DomainError> {
        let handle = self.session.acquire().await?;
        let pool = match handle.pool() {
            Some(pool) => pool.clone(),
            None => {
                debug!(
                    subject = %subject,
                    purpose = %purpose,
                    "Degraded store: reporting no active passcode"
                );
                return Ok(None);
            }
        };

        let query = r#"
            SELECT id, code, contact, issued_at, expires_at, used, attempts, created_at
            FROM passcodes
            WHERE subject = ? AND purpose = ? AND used = FALSE AND expires_at > NOW()
            ORDER BY created_at DESC, id ASC
            LIMIT 1
        "#;

        let row = self
            .session
            .execute_timed("passcode_find_active", None, async {
                sqlx::query(query)
                    .bind(subject.to_string())
                    .bind(purpose.as_str())
                    .fetch_optional(&pool)
                    .await
            })
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_record(&row, subject, purpose)?)),
            None => {
                debug!(
                    subject = %subject,
                    purpose = %purpose,
                    "No active passcode found"
                );
                Ok(None)
            }
        }
    }

    async fn find_most_recent(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<Option<PasscodeRecord>, DomainError> {
        let handle = self.session.acquire().await?;
        let pool = match handle.pool() {
            Some(pool) => pool.clone(),
            None => return Ok(None),
        };

        let query = r#"
            SELECT id, code, contact, issued_at, expires_at, used, attempts, created_at
            FROM passcodes
            WHERE subject = ? AND purpose = ?
            ORDER BY created_at DESC, id ASC
            LIMIT 1
        "#;

        let row = self
            .session
            .execute_timed("passcode_find_most_recent", None, async {
                sqlx::query(query)
                    .bind(subject.to_string())
                    .bind(purpose.as_str())
                    .fetch_optional(&pool)
                    .await
            })
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_record(&row, subject, purpose)?)),
            None => Ok(None),
        }
    }

    async fn invalidate_active(
        &self,
        subject: &SubjectId,
        purpose: Purpose,
    ) -> Result<u64, DomainError> {
        let handle = self.session.acquire().await?;
        let pool = match handle.pool() {
            Some(pool) => pool.clone(),
            None => {
                debug!(
                    subject = %subject,
                    purpose = %purpose,
                    "Degraded store: nothing to invalidate"
                );
                return Ok(0);
            }
        };

        let query = r#"
            UPDATE passcodes
            SET used = TRUE
            WHERE subject = ? AND purpose = ? AND used = FALSE
        "#;

        let result = self
            .session
            .execute_timed("passcode_invalidate_active", None, async {
                sqlx::query(query)
                    .bind(subject.to_string())
                    .bind(purpose.as_str())
                    .execute(&pool)
                    .await
            })
            .await?;

        let invalidated = result.rows_affected();
        if invalidated > 0 {
            info!(
                subject = %subject,
                purpose = %purpose,
                invalidated = invalidated,
                "Invalidated previously active passcodes"
            );
        }

        Ok(invalidated)
    }

    async fn insert(&self, record: PasscodeRecord) -> Result<PasscodeRecord, DomainError> {
        let handle = self.session.acquire().await?;
        let pool = match handle.pool() {
            Some(pool) => pool.clone(),
            None => {
                warn!(
                    subject = %record.subject,
                    purpose = %record.purpose,
                    "Degraded store: passcode insert reported as success without persisting"
                );
                let mut record = record;
                record.id = Some(DEGRADED_INSERT_ID);
                return Ok(record);
            }
        };

        let query = r#"
            INSERT INTO passcodes (
                subject, purpose, code, contact,
                issued_at, expires_at, used, attempts, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = self
            .session
            .execute_timed("passcode_insert", None, async {
                sqlx::query(query)
                    .bind(record.subject.to_string())
                    .bind(record.purpose.as_str())
                    .bind(&record.code)
                    .bind(&record.contact)
                    .bind(record.issued_at)
                    .bind(record.expires_at)
                    .bind(record.used)
                    .bind(record.attempts)
                    .bind(record.created_at)
                    .execute(&pool)
                    .await
            })
            .await?;

        let id = result.last_insert_id();
        debug!(
            subject = %record.subject,
            purpose = %record.purpose,
            passcode_id = id,
            "Stored passcode record"
        );

        let mut record = record;
        record.id = Some(id);
        Ok(record)
    }

    async fn increment_attempts(&self, id: u64) -> Result<i32, DomainError> {
        let handle = self.session.acquire().await?;
        let pool = match handle.pool() {
            Some(pool) => pool.clone(),
            None => {
                debug!(passcode_id = id, "Degraded store: attempt count not tracked");
                return Ok(1);
            }
        };

        let update = r#"
            UPDATE passcodes
            SET attempts = attempts + 1
            WHERE id = ?
        "#;

        let result = self
            .session
            .execute_timed("passcode_increment_attempts", None, async {
                sqlx::query(update).bind(id).execute(&pool).await
            })
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Internal {
                message: format!("No passcode record with id {}", id),
            });
        }

        let select = r#"
            SELECT attempts
            FROM passcodes
            WHERE id = ?
        "#;

        let row = self
            .session
            .execute_timed("passcode_get_attempts", None, async {
                sqlx::query(select).bind(id).fetch_one(&pool).await
            })
            .await?;

        let attempts = row
            .try_get::<i32, _>("attempts")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get attempts: {}", e),
            })?;

        debug!(
            passcode_id = id,
            attempts = attempts,
            "Incremented passcode attempt count"
        );

        Ok(attempts)
    }

    async fn mark_used(&self, id: u64) -> Result<(), DomainError> {
        let handle = self.session.acquire().await?;
        let pool = match handle.pool() {
            Some(pool) => pool.clone(),
            None => {
                debug!(passcode_id = id, "Degraded store: mark-used dropped");
                return Ok(());
            }
        };

        let query = r#"
            UPDATE passcodes
            SET used = TRUE
            WHERE id = ?
        "#;

        self.session
            .execute_timed("passcode_mark_used", None, async {
                sqlx::query(query).bind(id).execute(&pool).await
            })
            .await?;

        debug!(passcode_id = id, "Marked passcode record used");

        Ok(())
    }
}
