//! Submission boundary.
//!
//! The portal has no backend; submitting a form is an external
//! collaborator concern. The gateway trait is that boundary: it accepts a
//! validated record and reports success or failure. `SimulatedGateway`
//! is the shipping implementation, accepting everything, exactly like the
//! original portal's UI-only submit.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use serde::Serialize;

use crate::models::feedback::FeedbackForm;
use crate::models::registration::RegistrationForm;

/// Proof that a gateway accepted a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: u64,
}

/// Accepts validated portal submissions.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionGateway {
    fn submit_registration(&self, form: &RegistrationForm) -> Result<SubmissionReceipt>;
    fn submit_feedback(&self, form: &FeedbackForm) -> Result<SubmissionReceipt>;
}

/// Gateway that accepts every submission and hands out sequential
/// receipt ids.
#[derive(Debug, Default)]
pub struct SimulatedGateway {
    next_id: AtomicU64,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_receipt(&self) -> SubmissionReceipt {
        SubmissionReceipt {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
        }
    }
}

impl SubmissionGateway for SimulatedGateway {
    fn submit_registration(&self, form: &RegistrationForm) -> Result<SubmissionReceipt> {
        let receipt = self.next_receipt();
        log::info!(
            "registration accepted for event {} (receipt {})",
            form.event_id,
            receipt.id
        );
        Ok(receipt)
    }

    fn submit_feedback(&self, form: &FeedbackForm) -> Result<SubmissionReceipt> {
        let receipt = self.next_receipt();
        log::info!(
            "feedback accepted for \"{}\", rating {} (receipt {})",
            form.event,
            form.rating,
            receipt.id
        );
        Ok(receipt)
    }
}
