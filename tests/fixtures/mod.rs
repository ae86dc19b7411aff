// Test fixtures - reusable test data
// Provides consistent test data across all test files

use campus_events::models::category::Category;
use campus_events::models::event::Event;
use chrono::NaiveDate;

/// Reference dates for testing
pub mod dates {
    use super::*;

    /// The "now" reference most suites pin themselves to
    pub fn aug_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }
}

/// Build a minimal event with the fields the pipeline cares about.
pub fn event(id: i64, category: Category, date: &str) -> Event {
    Event {
        id,
        title: format!("Event {id}"),
        date: date.to_string(),
        time: "10:00 - 16:00".to_string(),
        location: String::new(),
        category,
        description: String::new(),
        image: String::new(),
        capacity: None,
        registered: None,
        registration_deadline: None,
    }
}

/// The worked example collection: one sports event and two academic ones.
pub fn worked_example() -> Vec<Event> {
    vec![
        event(1, Category::Sports, "2025-09-10"),
        event(2, Category::Academic, "2025-07-15"),
        event(3, Category::Academic, "2025-07-20"),
    ]
}
