//! Passcode record entity and its lifecycle helpers.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::subject::SubjectId;

/// What a passcode was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    /// Confirming ownership of a contact address
    Verification,
    /// Authorizing a password reset
    PasswordReset,
    /// Passwordless login
    Login,
}

impl Purpose {
    /// Storage representation of the purpose
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Verification => "verification",
            Purpose::PasswordReset => "password_reset",
            Purpose::Login => "login",
        }
    }

    /// Parses the storage representation back into a purpose
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "verification" => Some(Purpose::Verification),
            "password_reset" => Some(Purpose::PasswordReset),
            "login" => Some(Purpose::Login),
            _ => None,
        }
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single issued passcode and its accumulated verification state
///
/// Records are owned by the repository once persisted. The identity is
/// assigned by the store on insert and stays `None` until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasscodeRecord {
    /// Store-assigned identity, `None` until the record is inserted
    pub id: Option<u64>,

    /// Subject the passcode belongs to
    pub subject: SubjectId,

    /// What the passcode was issued for
    pub purpose: Purpose,

    /// The fixed-width numeric code
    pub code: String,

    /// Contact address the code was delivered to, when known
    pub contact: Option<String>,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the record has reached a terminal state
    pub used: bool,

    /// Number of verification attempts made against this record
    pub attempts: i32,

    /// Timestamp when the row was created
    pub created_at: DateTime<Utc>,
}

impl PasscodeRecord {
    /// Creates a new unpersisted passcode record
    ///
    /// # Arguments
    ///
    /// * `subject` - The subject the code belongs to
    /// * `purpose` - What the code authorizes
    /// * `code` - The generated numeric code
    /// * `contact` - The address the code will be delivered to, if known
    /// * `expiry_minutes` - Minutes until the code expires
    pub fn new(
        subject: SubjectId,
        purpose: Purpose,
        code: String,
        contact: Option<String>,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            subject,
            purpose,
            code,
            contact,
            issued_at: now,
            expires_at: now + Duration::minutes(expiry_minutes),
            used: false,
            attempts: 0,
            created_at: now,
        }
    }

    /// Checks if the passcode has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the passcode can still be verified against
    ///
    /// A record is active when it has not been used and has not expired.
    pub fn is_active(&self) -> bool {
        !self.used && !self.is_expired()
    }

    /// Marks the passcode as used, making its state terminal
    pub fn mark_used(&mut self) {
        self.used = true;
    }
}
