//! Subject identifier for passcode ownership.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PasscodeError;

static TEMPORARY_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^tmp_[A-Za-z0-9_-]{8,64}$").expect("Invalid temporary id regex"));

/// Identifier of the party a passcode belongs to
///
/// Canonical subjects are registered accounts keyed by UUID. Temporary
/// subjects are pre-registration sessions carrying an opaque `tmp_` token
/// handed out by the signup flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectId {
    /// Registered account, keyed by its canonical UUID
    Canonical(Uuid),

    /// Pre-registration session token (`tmp_` prefix, 8-64 chars of [A-Za-z0-9_-])
    Temporary(String),
}

impl SubjectId {
    /// Parses and normalizes a raw subject identifier
    ///
    /// Surrounding whitespace is trimmed. Canonical identifiers accept any
    /// UUID spelling and normalize to lowercase hyphenated form; temporary
    /// identifiers must already match the `tmp_` token shape exactly.
    ///
    /// # Arguments
    ///
    /// * `raw` - The subject identifier as received from the caller
    ///
    /// # Returns
    ///
    /// The normalized `SubjectId`, or `PasscodeError::InvalidSubject` with a
    /// masked rendition of the input
    pub fn parse(raw: &str) -> Result<Self, PasscodeError> {
        let trimmed = raw.trim();

        if let Ok(uuid) = Uuid::parse_str(trimmed) {
            return Ok(Self::Canonical(uuid));
        }

        if TEMPORARY_ID_REGEX.is_match(trimmed) {
            return Ok(Self::Temporary(trimmed.to_string()));
        }

        Err(PasscodeError::InvalidSubject {
            subject: mask_subject(trimmed),
        })
    }

    /// Returns true for pre-registration session identifiers
    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary(_))
    }

    /// Canonical UUID of a registered subject, if this is one
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Canonical(uuid) => Some(*uuid),
            Self::Temporary(_) => None,
        }
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical(uuid) => write!(f, "{}", uuid),
            Self::Temporary(token) => write!(f, "{}", token),
        }
    }
}

/// Mask a rejected subject identifier for error payloads and logs
fn mask_subject(raw: &str) -> String {
    if raw.is_empty() {
        return "<empty>".to_string();
    }
    let head: String = raw.chars().take(4).collect();
    format!("{}***", head)
}
