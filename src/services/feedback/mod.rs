//! Feedback intake.
//!
//! Mirrors the registration path: validate, then forward to the
//! submission gateway.

use thiserror::Error;

use crate::models::feedback::{FeedbackForm, FeedbackFormError};

use super::submission::{SubmissionGateway, SubmissionReceipt};

/// Why a feedback submission was not accepted.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    Form(#[from] FeedbackFormError),
    #[error("submission failed")]
    Gateway(#[source] anyhow::Error),
}

/// Intake service for feedback forms.
pub struct FeedbackService<G> {
    gateway: G,
}

impl<G: SubmissionGateway> FeedbackService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn submit(&self, form: &FeedbackForm) -> Result<SubmissionReceipt, FeedbackError> {
        form.validate()?;

        log::debug!("forwarding feedback for \"{}\"", form.event);
        self.gateway
            .submit_feedback(form)
            .map_err(FeedbackError::Gateway)
    }
}
