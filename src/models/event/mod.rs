// Event module
// Portal event record: the scheduling anchor for the pipeline and countdown

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::utils::date;

/// A scheduled portal event.
///
/// The record is immutable input data: it is authored once (today as an
/// embedded constant, in a real deployment by a read-only fetch) and never
/// mutated at runtime. `date` is an ISO 8601 calendar date and `time` a
/// free-text "start - end" range of which only the start is meaningful to
/// the countdown. The registration fields are optional; `registered` is
/// expected to stay within `capacity` but this is never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub registered: Option<u32>,
    #[serde(default)]
    pub registration_deadline: Option<String>,
}

impl Event {
    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.parsed_date().is_none() {
            return Err(format!("Event date '{}' is not a valid ISO date", self.date));
        }

        Ok(())
    }

    /// The parsed calendar date, or `None` when the date field is
    /// malformed. Callers treat `None` as a degraded-but-defined input,
    /// never an error.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        date::parse_iso_date(&self.date)
    }

    /// The instant the event starts: its date combined with the start of
    /// its time range.
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        date::combine(&self.date, &self.time)
    }

    /// Whether the record carries registration data at all.
    pub fn accepts_registrations(&self) -> bool {
        self.capacity.is_some() && self.registration_deadline.is_some()
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<i64>,
    title: Option<String>,
    date: Option<String>,
    time: String,
    location: String,
    category: Option<Category>,
    description: String,
    image: String,
    capacity: Option<u32>,
    registered: Option<u32>,
    registration_deadline: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            date: None,
            time: String::new(),
            location: String::new(),
            category: None,
            description: String::new(),
            image: String::new(),
            capacity: None,
            registered: None,
            registration_deadline: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the calendar date (ISO 8601, e.g. "2025-07-20")
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the time range (e.g. "10:00 - 16:00")
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set registration capacity and the count already registered
    pub fn registration(mut self, capacity: u32, registered: u32, deadline: impl Into<String>) -> Self {
        self.capacity = Some(capacity);
        self.registered = Some(registered);
        self.registration_deadline = Some(deadline.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let date = self.date.ok_or("Event date is required")?;
        let category = self.category.ok_or("Event category is required")?;

        let event = Event {
            id,
            title,
            date,
            time: self.time,
            location: self.location,
            category,
            description: self.description,
            image: self.image,
            capacity: self.capacity,
            registered: self.registered,
            registration_deadline: self.registration_deadline,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
