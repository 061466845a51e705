//! Passcode verification service

use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use crate::domain::entities::passcode::Purpose;
use crate::domain::entities::subject::SubjectId;
use crate::errors::{DomainError, DomainResult, PasscodeError};
use crate::repositories::passcode::PasscodeRepository;
use crate::repositories::subject::SubjectStore;

use super::config::PasscodeConfig;
use super::traits::MetricsSink;
use super::updater::SubjectVerificationUpdater;

/// Verifies submitted passcodes against the newest active record
pub struct PasscodeVerifier<R: PasscodeRepository, S: SubjectStore, M: MetricsSink> {
    /// Passcode persistence
    repository: Arc<R>,
    /// Best-effort verification flag propagation
    updater: Arc<SubjectVerificationUpdater<S>>,
    /// Metrics sink for verify outcomes
    metrics: Arc<M>,
    /// Service configuration
    config: PasscodeConfig,
}

impl<R: PasscodeRepository, S: SubjectStore, M: MetricsSink> PasscodeVerifier<R, S, M> {
    /// Create a new verifier
    ///
    /// # Arguments
    ///
    /// * `repository` - Passcode repository implementation
    /// * `updater` - Subject verification updater
    /// * `metrics` - Metrics sink implementation
    /// * `config` - Service configuration
    pub fn new(
        repository: Arc<R>,
        updater: Arc<SubjectVerificationUpdater<S>>,
        metrics: Arc<M>,
        config: PasscodeConfig,
    ) -> Self {
        Self {
            repository,
            updater,
            metrics,
            config,
        }
    }

    /// Verify a submitted code against the active passcode
    ///
    /// This method:
    /// 1. Normalizes the subject identifier
    /// 2. Loads the newest active record; absence means not-found-or-expired
    /// 3. Increments the attempt counter before comparing; exceeding the
    ///    maximum invalidates the record
    /// 4. Compares codes in constant time, padded to equal width
    /// 5. Marks the record used on a match and, for verification-purpose
    ///    codes, propagates the subject's verification flags best-effort
    ///
    /// A mismatch is an `Ok(false)` result, not an error; the attempt still
    /// counts.
    ///
    /// # Arguments
    ///
    /// * `subject` - Raw subject identifier (canonical UUID or `tmp_` token)
    /// * `submitted_code` - The code provided by the subject
    /// * `purpose` - The purpose the code was issued for
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Code matched; the record is now terminal
    /// * `Ok(false)` - Code did not match
    /// * `Err(DomainError)` - `NotFoundOrExpired`, `TooManyAttempts`,
    ///   `InvalidSubject`, or a store failure
    pub async fn verify(
        &self,
        subject: &str,
        submitted_code: &str,
        purpose: Purpose,
    ) -> DomainResult<bool> {
        let subject = SubjectId::parse(subject)?;

        let record = self
            .repository
            .find_active(&subject, purpose)
            .await?
            .ok_or(PasscodeError::NotFoundOrExpired)?;
        let id = record.id.ok_or_else(|| DomainError::Internal {
            message: "Active record has no id".to_string(),
        })?;

        // Attempts count even for mismatches, so increment first
        let attempts = self.repository.increment_attempts(id).await?;
        if attempts > self.config.max_attempts {
            self.repository.mark_used(id).await?;
            tracing::warn!(
                subject = %subject,
                purpose = %purpose,
                passcode_id = id,
                attempts = attempts,
                event = "verify_attempts_exhausted",
                "Verification attempts exhausted, passcode invalidated"
            );
            self.metrics.track_event(
                "passcode_verify",
                "too_many_attempts",
                &[("purpose", purpose.as_str())],
            );
            return Err(PasscodeError::TooManyAttempts.into());
        }

        let matched =
            Self::constant_time_compare(&record.code, submitted_code, self.config.code_length);

        if matched {
            self.repository.mark_used(id).await?;
            tracing::info!(
                subject = %subject,
                purpose = %purpose,
                passcode_id = id,
                event = "passcode_verified",
                "Passcode successfully verified"
            );
            self.metrics.track_event(
                "passcode_verify",
                "verified",
                &[("purpose", purpose.as_str())],
            );

            if purpose == Purpose::Verification {
                self.updater.apply(&subject, record.contact.as_deref()).await;
            }

            Ok(true)
        } else {
            let remaining = (self.config.max_attempts - attempts).max(0);
            tracing::warn!(
                subject = %subject,
                purpose = %purpose,
                passcode_id = id,
                remaining_attempts = remaining,
                event = "passcode_mismatch",
                "Submitted code did not match"
            );
            self.metrics.track_event(
                "passcode_verify",
                "mismatch",
                &[("purpose", purpose.as_str())],
            );

            Ok(false)
        }
    }

    /// Get the remaining verification attempts for the active passcode
    ///
    /// Returns 0 when no active passcode exists for the pair.
    ///
    /// # Arguments
    ///
    /// * `subject` - Raw subject identifier
    /// * `purpose` - The purpose the code was issued for
    pub async fn remaining_attempts(&self, subject: &str, purpose: Purpose) -> DomainResult<i32> {
        let subject = SubjectId::parse(subject)?;

        let remaining = match self.repository.find_active(&subject, purpose).await? {
            Some(record) => (self.config.max_attempts - record.attempts).max(0),
            None => 0,
        };
        Ok(remaining)
    }

    /// Perform constant-time comparison of two codes
    ///
    /// Both operands are padded to the same width before comparing, so the
    /// comparison never short-circuits on length and its timing is
    /// independent of where the codes differ.
    ///
    /// # Arguments
    ///
    /// * `stored_code` - The code on record
    /// * `submitted_code` - The code provided by the subject
    /// * `width` - The configured code width to pad to
    fn constant_time_compare(stored_code: &str, submitted_code: &str, width: usize) -> bool {
        let len = width.max(stored_code.len()).max(submitted_code.len());
        let mut stored = vec![0u8; len];
        let mut submitted = vec![0u8; len];
        stored[..stored_code.len()].copy_from_slice(stored_code.as_bytes());
        submitted[..submitted_code.len()].copy_from_slice(submitted_code.as_bytes());
        constant_time_eq(&stored, &submitted)
    }
}
