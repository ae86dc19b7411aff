//! Feedback form model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::locale::{Locale, Localized};
use super::registration::is_plausible_email;

/// Rating labels, worst to best, indexed by `rating - 1`.
const RATING_LABELS: [Localized; 5] = [
    Localized::new("Very dissatisfied", "Rất không hài lòng"),
    Localized::new("Dissatisfied", "Không hài lòng"),
    Localized::new("Neutral", "Bình thường"),
    Localized::new("Satisfied", "Hài lòng"),
    Localized::new("Very satisfied", "Rất hài lòng"),
];

/// A filled-in event feedback form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    /// Who is giving feedback ("student", "lecturer", "guest", ...).
    pub user_type: String,
    /// The event being reviewed, by display name.
    pub event: String,
    /// 1 (worst) to 5 (best).
    pub rating: u8,
    #[serde(default)]
    pub comments: String,
}

/// Validation errors for a feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedbackFormError {
    #[error("name is required")]
    MissingName,
    #[error("email address is required")]
    MissingEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("user type is required")]
    MissingUserType,
    #[error("an event must be selected")]
    MissingEvent,
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
}

impl FeedbackForm {
    /// Validate the form. Comments are optional.
    pub fn validate(&self) -> Result<(), FeedbackFormError> {
        if self.name.trim().is_empty() {
            return Err(FeedbackFormError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(FeedbackFormError::MissingEmail);
        }
        if !is_plausible_email(&self.email) {
            return Err(FeedbackFormError::InvalidEmail);
        }
        if self.user_type.trim().is_empty() {
            return Err(FeedbackFormError::MissingUserType);
        }
        if self.event.trim().is_empty() {
            return Err(FeedbackFormError::MissingEvent);
        }
        if !(1..=5).contains(&self.rating) {
            return Err(FeedbackFormError::RatingOutOfRange);
        }
        Ok(())
    }
}

/// Localized label for a 1-5 rating, `None` outside the scale.
pub fn rating_label(rating: u8, locale: Locale) -> Option<&'static str> {
    RATING_LABELS
        .get(rating.checked_sub(1)? as usize)
        .map(|label| label.get(locale))
}
