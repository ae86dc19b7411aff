//! Registration form model.
//!
//! Captures what a visitor types into the registration page. Validation
//! happens here, before the form ever reaches the submission gateway, so
//! the gateway only sees well-formed records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A filled-in event registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub event_id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    pub faculty: String,
    pub year: String,
    #[serde(default)]
    pub notes: String,
}

/// Validation errors for a registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationFormError {
    #[error("full name is required")]
    MissingFullName,
    #[error("email address is required")]
    MissingEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("phone number is required")]
    MissingPhone,
    #[error("student id is required")]
    MissingStudentId,
    #[error("faculty is required")]
    MissingFaculty,
    #[error("study year is required")]
    MissingYear,
}

impl RegistrationForm {
    /// Validate the form. Notes are optional; everything else is required.
    pub fn validate(&self) -> Result<(), RegistrationFormError> {
        if self.full_name.trim().is_empty() {
            return Err(RegistrationFormError::MissingFullName);
        }
        if self.email.trim().is_empty() {
            return Err(RegistrationFormError::MissingEmail);
        }
        if !is_plausible_email(&self.email) {
            return Err(RegistrationFormError::InvalidEmail);
        }
        if self.phone.trim().is_empty() {
            return Err(RegistrationFormError::MissingPhone);
        }
        if self.student_id.trim().is_empty() {
            return Err(RegistrationFormError::MissingStudentId);
        }
        if self.faculty.trim().is_empty() {
            return Err(RegistrationFormError::MissingFaculty);
        }
        if self.year.trim().is_empty() {
            return Err(RegistrationFormError::MissingYear);
        }
        Ok(())
    }
}

/// Shallow shape check: one '@' with a dotted, non-empty domain.
pub(crate) fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}
