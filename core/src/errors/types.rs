//! Domain-specific error types for passcode issuance and verification
//!
//! This module provides error type definitions for the passcode lifecycle and
//! the durable store behind it. User-facing messages are rendered by the
//! presentation layer; these variants carry the data that layer needs.

use thiserror::Error;

/// Passcode lifecycle errors
///
/// These errors represent guard failures in the issue/verify flows. Each
/// variant carries the caller-actionable data for that failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasscodeError {
    #[error("Rate limited: retry in {seconds_remaining} seconds")]
    RateLimited { seconds_remaining: i64 },

    #[error("Passcode not found or expired")]
    NotFoundOrExpired,

    #[error("Maximum verification attempts exceeded")]
    TooManyAttempts,

    #[error("Invalid subject identifier: {subject}")]
    InvalidSubject { subject: String },

    #[error("Delivery failed: {reason}")]
    DeliveryFailed { reason: String },
}

/// Durable store errors
///
/// These errors surface from the resilient store session and the repository
/// implementations built on it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable after {attempts} connection attempts")]
    Unavailable { attempts: u32 },

    #[error("Store operation '{operation}' timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    #[error("Store backend error: {message}")]
    Backend { message: String },

    #[error("Store configuration error: {message}")]
    Config { message: String },
}

impl StoreError {
    /// Wrap a backend driver error, stringified at the storage boundary
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend {
            message: err.to_string(),
        }
    }
}
