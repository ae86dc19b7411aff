//! Event registration.
//!
//! Availability is decided from the record's capacity, registered count
//! and deadline; the intake path validates a form against the catalog and
//! forwards it to the submission gateway. Nothing here mutates the event
//! collection: the registered counts are display data, not a ledger.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::event::Event;
use crate::models::registration::{RegistrationForm, RegistrationFormError};
use crate::utils::date;

use super::submission::{SubmissionGateway, SubmissionReceipt};

/// Whether an event can currently be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Open,
    Closed,
    Full,
}

/// Spots still available, or `None` when the event carries no capacity
/// data. Saturates rather than trusting `registered <= capacity`.
pub fn spots_left(event: &Event) -> Option<u32> {
    let capacity = event.capacity?;
    Some(capacity.saturating_sub(event.registered.unwrap_or(0)))
}

/// Registration status at date granularity. The deadline day itself is
/// still open; a missing or malformed deadline means closed, never a
/// failure.
pub fn registration_status(event: &Event, today: NaiveDate) -> RegistrationStatus {
    let Some(deadline) = event
        .registration_deadline
        .as_deref()
        .and_then(date::parse_iso_date)
    else {
        return RegistrationStatus::Closed;
    };

    if today > deadline {
        return RegistrationStatus::Closed;
    }

    match spots_left(event) {
        Some(0) => RegistrationStatus::Full,
        Some(_) => RegistrationStatus::Open,
        None => RegistrationStatus::Closed,
    }
}

/// Why a registration was not accepted.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Form(#[from] RegistrationFormError),
    #[error("no event with id {0}")]
    UnknownEvent(i64),
    #[error("registration for \"{0}\" has closed")]
    Closed(String),
    #[error("\"{0}\" has no spots left")]
    Full(String),
    #[error("submission failed")]
    Gateway(#[source] anyhow::Error),
}

/// Intake service for registration forms.
pub struct RegistrationService<G> {
    gateway: G,
}

impl<G: SubmissionGateway> RegistrationService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Validate a form against the event collection and forward it.
    pub fn register(
        &self,
        events: &[Event],
        form: &RegistrationForm,
        today: NaiveDate,
    ) -> Result<SubmissionReceipt, RegistrationError> {
        form.validate()?;

        let event = events
            .iter()
            .find(|event| event.id == form.event_id)
            .ok_or(RegistrationError::UnknownEvent(form.event_id))?;

        match registration_status(event, today) {
            RegistrationStatus::Open => {}
            RegistrationStatus::Closed => {
                return Err(RegistrationError::Closed(event.title.clone()))
            }
            RegistrationStatus::Full => return Err(RegistrationError::Full(event.title.clone())),
        }

        log::debug!("forwarding registration for event {}", event.id);
        self.gateway
            .submit_registration(form)
            .map_err(RegistrationError::Gateway)
    }
}
