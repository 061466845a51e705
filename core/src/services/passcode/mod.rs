//! Passcode issuance and verification module
//!
//! This module provides the complete passcode workflow:
//! - Code generation and issuance with cooldown and supersession
//! - Verification with attempt tracking and constant-time comparison
//! - Best-effort propagation of verification flags onto subject rows
//! - Integration seams for delivery and metrics collaborators

mod config;
mod issuer;
mod traits;
mod types;
mod updater;
mod verifier;

#[cfg(test)]
mod tests;

pub use config::PasscodeConfig;
pub use issuer::PasscodeIssuer;
pub use traits::{DeliveryDispatcher, MetricsSink};
pub use types::{DeliveryReceipt, DeliveryStatus, IssueOutcome};
pub use updater::SubjectVerificationUpdater;
pub use verifier::PasscodeVerifier;
