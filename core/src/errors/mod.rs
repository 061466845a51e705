//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{PasscodeError, StoreError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Passcode(#[from] PasscodeError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;
