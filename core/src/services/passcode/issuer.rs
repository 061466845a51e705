//! Passcode issuance service

use chrono::{Duration, Utc};
use rand::{rngs::OsRng, Rng};
use std::sync::Arc;

use pl_shared::utils::contact::{looks_like_email, mask_contact, normalize_contact};

use crate::domain::entities::passcode::{PasscodeRecord, Purpose};
use crate::domain::entities::subject::SubjectId;
use crate::errors::{DomainError, DomainResult, PasscodeError};
use crate::repositories::passcode::PasscodeRepository;

use super::config::PasscodeConfig;
use super::traits::{DeliveryDispatcher, MetricsSink};
use super::types::{DeliveryStatus, IssueOutcome};

/// Issues passcodes, enforcing cooldown and supersession of prior codes
pub struct PasscodeIssuer<R: PasscodeRepository, D: DeliveryDispatcher, M: MetricsSink> {
    /// Passcode persistence
    repository: Arc<R>,
    /// Delivery integration for the combined issue-and-send flow
    delivery: Arc<D>,
    /// Metrics sink for issue outcomes
    metrics: Arc<M>,
    /// Service configuration
    config: PasscodeConfig,
}

impl<R: PasscodeRepository, D: DeliveryDispatcher, M: MetricsSink> PasscodeIssuer<R, D, M> {
    /// Create a new issuer
    ///
    /// # Arguments
    ///
    /// * `repository` - Passcode repository implementation
    /// * `delivery` - Delivery dispatcher implementation
    /// * `metrics` - Metrics sink implementation
    /// * `config` - Service configuration
    pub fn new(
        repository: Arc<R>,
        delivery: Arc<D>,
        metrics: Arc<M>,
        config: PasscodeConfig,
    ) -> Self {
        Self {
            repository,
            delivery,
            metrics,
            config,
        }
    }

    /// Issue a new passcode for a subject and purpose
    ///
    /// This method:
    /// 1. Normalizes the subject identifier
    /// 2. Invalidates all currently-active codes for the pair
    /// 3. Enforces the resend cooldown against the most recent record
    /// 4. Generates a new code and persists it
    /// 5. Returns the plaintext code for the caller's delivery step
    ///
    /// # Arguments
    ///
    /// * `subject` - Raw subject identifier (canonical UUID or `tmp_` token)
    /// * `purpose` - What the code will authorize
    /// * `contact` - Contact identifier the code will be delivered to, if known
    ///
    /// # Returns
    ///
    /// * `Ok(IssueOutcome)` - Record id, plaintext code, expiry and resend time
    /// * `Err(DomainError)` - `RateLimited`, `InvalidSubject`, or a store failure
    pub async fn issue(
        &self,
        subject: &str,
        purpose: Purpose,
        contact: Option<&str>,
    ) -> DomainResult<IssueOutcome> {
        let subject = SubjectId::parse(subject)?;

        // Supersede previous codes so only the newest one can verify
        let superseded = self
            .repository
            .invalidate_active(&subject, purpose)
            .await?;
        if superseded > 0 {
            tracing::info!(
                subject = %subject,
                purpose = %purpose,
                superseded = superseded,
                event = "passcodes_superseded",
                "Invalidated previously active passcodes"
            );
        }

        // Cooldown is measured against the newest record in any state
        if let Some(recent) = self.repository.find_most_recent(&subject, purpose).await? {
            let elapsed = Utc::now()
                .signed_duration_since(recent.created_at)
                .num_seconds();
            if elapsed < self.config.cooldown_seconds {
                let seconds_remaining = self.config.cooldown_seconds - elapsed;
                tracing::warn!(
                    subject = %subject,
                    purpose = %purpose,
                    seconds_remaining = seconds_remaining,
                    event = "issue_rate_limited",
                    "Passcode requested within the cooldown window"
                );
                self.metrics.track_event(
                    "passcode_issue",
                    "rate_limited",
                    &[("purpose", purpose.as_str())],
                );
                return Err(PasscodeError::RateLimited { seconds_remaining }.into());
            }
        }

        let code = Self::generate_code(self.config.code_length);
        let record = PasscodeRecord::new(
            subject.clone(),
            purpose,
            code,
            contact.map(normalize_contact),
            self.config.expiry_minutes,
        );

        let persisted = self.repository.insert(record).await?;
        let id = persisted.id.ok_or_else(|| DomainError::Internal {
            message: "Insert returned a record without an id".to_string(),
        })?;

        tracing::info!(
            subject = %subject,
            purpose = %purpose,
            passcode_id = id,
            event = "passcode_issued",
            "Issued new passcode"
        );
        self.metrics.track_event(
            "passcode_issue",
            "issued",
            &[("purpose", purpose.as_str())],
        );

        Ok(IssueOutcome {
            id,
            code: persisted.code,
            expires_at: persisted.expires_at,
            next_resend_at: Utc::now() + Duration::seconds(self.config.cooldown_seconds),
        })
    }

    /// Issue a passcode and dispatch it to the contact in one step
    ///
    /// Delivery failure is soft: the issued code stays valid, the failure is
    /// logged and counted, and the outcome is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `subject` - Raw subject identifier
    /// * `purpose` - What the code will authorize
    /// * `contact` - Where to deliver the code (email or phone)
    pub async fn issue_and_send(
        &self,
        subject: &str,
        purpose: Purpose,
        contact: &str,
    ) -> DomainResult<IssueOutcome> {
        let outcome = self.issue(subject, purpose, Some(contact)).await?;

        let message = format!(
            "Your Passlane code is {}. It expires in {} minutes.",
            outcome.code, self.config.expiry_minutes
        );

        let dispatched = if looks_like_email(contact) {
            self.delivery
                .send_email(contact, "Your Passlane code", &message)
                .await
        } else {
            self.delivery.send_sms(contact, &message).await
        };

        match dispatched {
            Ok(receipt) if receipt.status == DeliveryStatus::Sent => {
                tracing::info!(
                    contact = %mask_contact(contact),
                    message_id = receipt.message_id.as_deref().unwrap_or("-"),
                    event = "passcode_delivered",
                    "Dispatched passcode message"
                );
                self.metrics.track_event(
                    "passcode_delivery",
                    "sent",
                    &[("purpose", purpose.as_str())],
                );
            }
            Ok(receipt) => {
                let err = PasscodeError::DeliveryFailed {
                    reason: format!("provider rejected message: {:?}", receipt.status),
                };
                tracing::warn!(
                    contact = %mask_contact(contact),
                    error = %err,
                    event = "passcode_delivery_failed",
                    "Passcode delivery was rejected, code remains valid"
                );
                self.metrics.track_event(
                    "passcode_delivery",
                    "failed",
                    &[("purpose", purpose.as_str())],
                );
            }
            Err(reason) => {
                let err = PasscodeError::DeliveryFailed { reason };
                tracing::warn!(
                    contact = %mask_contact(contact),
                    error = %err,
                    event = "passcode_delivery_failed",
                    "Passcode delivery errored, code remains valid"
                );
                self.metrics.track_event(
                    "passcode_delivery",
                    "failed",
                    &[("purpose", purpose.as_str())],
                );
            }
        }

        Ok(outcome)
    }

    /// Generate a cryptographically secure fixed-length numeric code
    ///
    /// Uses OsRng and draws uniformly from [10^(length-1), 10^length), so the
    /// first digit is never zero and every code has exactly `length` digits.
    pub fn generate_code(length: usize) -> String {
        let mut rng = OsRng;
        let low = 10u64.pow(length as u32 - 1);
        let high = 10u64.pow(length as u32);
        rng.gen_range(low..high).to_string()
    }
}
