//! Local input validation
//!
//! Checks that run before any network call. A failed check never reaches the
//! session pipeline.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MIN_LOGIN_LENGTH, MIN_PASSWORD_LENGTH};

/// Validation failures surfaced to the user next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("rental end date must be after the start date")]
    InvalidDateRange,
}

impl ValidationError {
    fn required(field: &str) -> Self {
        Self::Required { field: field.to_string() }
    }

    fn too_short(field: &str, min: usize) -> Self {
        Self::TooShort { field: field.to_string(), min }
    }
}

/// Registration form as typed by the user, before trimming.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub login: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").ok())
        .as_ref()
}

/// Validate the login form.
///
/// # Errors
/// Returns the first failing check.
pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::required("username"));
    }
    if password.trim().is_empty() {
        return Err(ValidationError::required("password"));
    }
    Ok(())
}

/// Validate the registration form.
///
/// # Errors
/// Returns the first failing check, in field order.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    let login = form.login.trim();
    if login.is_empty() {
        return Err(ValidationError::required("login"));
    }
    if login.chars().count() < MIN_LOGIN_LENGTH {
        return Err(ValidationError::too_short("login", MIN_LOGIN_LENGTH));
    }
    if form.last_name.trim().is_empty() {
        return Err(ValidationError::required("last name"));
    }
    let email = form.email.trim();
    if email.is_empty() {
        return Err(ValidationError::required("email"));
    }
    if !email_pattern().is_some_and(|pattern| pattern.is_match(email)) {
        return Err(ValidationError::InvalidEmail);
    }
    let password = form.password.trim();
    if password.is_empty() {
        return Err(ValidationError::required("password"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::too_short("password", MIN_PASSWORD_LENGTH));
    }
    if password != form.confirm_password.trim() {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Validate a password change.
///
/// # Errors
/// Returns the first failing check.
pub fn validate_password_change(
    old_password: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if old_password.trim().is_empty() {
        return Err(ValidationError::required("old password"));
    }
    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::too_short("new password", MIN_PASSWORD_LENGTH));
    }
    if new_password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Validate a rental period. The end date is exclusive.
///
/// # Errors
/// Returns [`ValidationError::InvalidDateRange`] when `end` is not after
/// `start`.
pub fn validate_rental_period(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::InvalidDateRange);
    }
    Ok(())
}
