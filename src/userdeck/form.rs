//! Form constraints checked before a draft is submitted: both fields are
//! required and the email must look like an address. Server-side rejection
//! reasons are not modeled.

use super::types::UserDraft;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Email must be a valid address")]
    InvalidEmail,
}

pub fn valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok())
        .as_ref()
        .map_or(false, |re| re.is_match(email))
}

/// Checks the draft in field order and returns the first violation.
///
/// # Errors
/// Returns the first [`FormError`] found.
pub fn validate(draft: &UserDraft) -> Result<(), FormError> {
    if draft.name.is_empty() {
        return Err(FormError::MissingName);
    }

    let email = draft.email.trim();
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    if !valid_email(email) {
        return Err(FormError::InvalidEmail);
    }

    Ok(())
}
