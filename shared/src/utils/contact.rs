//! Contact handling utilities
//!
//! Helpers for classifying, normalizing, and masking the contact
//! addresses passcodes are delivered to. Masked forms are safe to log.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex"));

/// Returns true when the contact string has the shape of an email address
///
/// # Examples
///
/// ```
/// use pl_shared::utils::contact::looks_like_email;
///
/// assert!(looks_like_email("rider@example.com"));
/// assert!(!looks_like_email("+8613812345678"));
/// ```
pub fn looks_like_email(contact: &str) -> bool {
    EMAIL_REGEX.is_match(contact)
}

/// Normalize a contact address before storing or matching on it
///
/// Trims surrounding whitespace and lowercases email addresses. Phone
/// numbers pass through unchanged.
pub fn normalize_contact(contact: &str) -> String {
    let trimmed = contact.trim();
    if looks_like_email(trimmed) {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

/// Mask a contact address for logging
///
/// Emails keep the first character of the local part and the full domain.
/// Anything else keeps only the last four characters.
///
/// # Examples
///
/// ```
/// use pl_shared::utils::contact::mask_contact;
///
/// assert_eq!(mask_contact("rider@example.com"), "r***@example.com");
/// assert_eq!(mask_contact("+8613812345678"), "***5678");
/// ```
pub fn mask_contact(contact: &str) -> String {
    if let Some((local, domain)) = contact.split_once('@') {
        match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        }
    } else {
        match contact.char_indices().rev().nth(3) {
            Some((idx, _)) => format!("***{}", &contact[idx..]),
            None => "****".to_string(),
        }
    }
}

/// Mask a passcode for logging, keeping only the last two digits
pub fn mask_code(code: &str) -> String {
    match code.char_indices().rev().nth(1) {
        Some((idx, _)) => format!("****{}", &code[idx..]),
        None => "******".to_string(),
    }
}
