//! Configuration for the passcode services

use serde::{Deserialize, Serialize};

/// Configuration shared by the passcode issuer and verifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasscodeConfig {
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Number of minutes before a passcode expires
    pub expiry_minutes: i64,
    /// Maximum number of verification attempts allowed
    pub max_attempts: i32,
    /// Minimum seconds between issue requests for the same subject and purpose
    pub cooldown_seconds: i64,
}

impl Default for PasscodeConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            expiry_minutes: 10,
            max_attempts: 5,
            cooldown_seconds: 60,
        }
    }
}

impl PasscodeConfig {
    /// Create from environment variables
    ///
    /// Reads `PASSCODE_LENGTH`, `PASSCODE_EXPIRY_MINUTES`,
    /// `PASSCODE_MAX_ATTEMPTS` and `PASSCODE_COOLDOWN_SECONDS`, falling back
    /// to the defaults. The code length is clamped to 4..=9 digits.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let code_length = std::env::var("PASSCODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_length)
            .clamp(4, 9);
        let expiry_minutes = std::env::var("PASSCODE_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.expiry_minutes);
        let max_attempts = std::env::var("PASSCODE_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_attempts);
        let cooldown_seconds = std::env::var("PASSCODE_COOLDOWN_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.cooldown_seconds);

        Self {
            code_length,
            expiry_minutes,
            max_attempts,
            cooldown_seconds,
        }
    }
}
