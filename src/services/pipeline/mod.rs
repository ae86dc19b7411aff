//! Event list filter/sort pipeline.
//!
//! Pure functions from an immutable event collection, a category filter
//! and a sort key to the ordered views the display layer renders. The
//! pipeline never mutates its input, is deterministic for identical
//! inputs, and stays total in the face of malformed dates: a bad record
//! sorts last instead of failing the whole listing.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::category::Category;
use crate::models::event::Event;

/// Category filter: the "all" sentinel or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter code: "all" or a category code.
    pub fn parse(code: &str) -> Option<Self> {
        if code.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::parse(code).map(Self::Only)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }
}

/// Orderings the event list can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Soonest date first.
    #[default]
    DateAsc,
    /// Latest date first.
    DateDesc,
    /// Title, A to Z.
    TitleAlpha,
    /// Category code, A to Z.
    CategoryAlpha,
}

impl SortKey {
    /// Parse a sort code as the portal's sort selector emits them.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "date" => Some(Self::DateAsc),
            "date-desc" => Some(Self::DateDesc),
            "name" => Some(Self::TitleAlpha),
            "category" => Some(Self::CategoryAlpha),
            _ => None,
        }
    }
}

/// Filter and order a collection into a new sequence.
///
/// Stable: events with equal sort keys keep their relative input order.
pub fn apply(events: &[Event], filter: CategoryFilter, key: SortKey) -> Vec<Event> {
    let mut selected: Vec<Event> = events
        .iter()
        .filter(|event| filter.matches(event.category))
        .cloned()
        .collect();

    selected.sort_by(|a, b| compare(a, b, key));
    selected
}

fn compare(a: &Event, b: &Event, key: SortKey) -> Ordering {
    match key {
        SortKey::DateAsc => compare_dates(a.parsed_date(), b.parsed_date(), false),
        SortKey::DateDesc => compare_dates(a.parsed_date(), b.parsed_date(), true),
        SortKey::TitleAlpha => compare_folded(&a.title, &b.title),
        SortKey::CategoryAlpha => a.category.code().cmp(b.category.code()),
    }
}

/// Unparseable dates order last under both directions, keeping the order
/// total without raising.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if descending {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive comparison standing in for locale collation.
fn compare_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Split a collection into upcoming and past at date granularity.
///
/// An event dated today is upcoming. A malformed date counts as past,
/// matching the countdown's treatment of an invalid instant as expired.
pub fn split_by_date(events: &[Event], today: NaiveDate) -> (Vec<Event>, Vec<Event>) {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();

    for event in events {
        match event.parsed_date() {
            Some(date) if date >= today => upcoming.push(event.clone()),
            _ => past.push(event.clone()),
        }
    }

    (upcoming, past)
}

/// The two event partitions, independently filtered and sorted under one
/// shared filter and sort key.
///
/// An empty view is a valid outcome the display layer renders as an
/// explicit "no results" state, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventViews {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

impl EventViews {
    pub fn build(events: &[Event], filter: CategoryFilter, key: SortKey, today: NaiveDate) -> Self {
        let (upcoming, past) = split_by_date(events, today);
        Self {
            upcoming: apply(&upcoming, filter, key),
            past: apply(&past, filter, key),
        }
    }

    pub fn total(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(id: i64, category: Category, date: &str) -> Event {
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

    fn ids(events: &[Event]) -> Vec<i64> {
        events.iter().map(|e| e.id).collect()
    }

    fn sample() -> Vec<Event> {
        vec![
            event(1, Category::Sports, "2025-09-10"),
            event(2, Category::Academic, "2025-07-15"),
            event(3, Category::Academic, "2025-07-20"),
        ]
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::parse("ALL"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("sports"),
            Some(CategoryFilter::Only(Category::Sports))
        );
        assert_eq!(CategoryFilter::parse("music"), None);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("date"), Some(SortKey::DateAsc));
        assert_eq!(SortKey::parse("date-desc"), Some(SortKey::DateDesc));
        assert_eq!(SortKey::parse("name"), Some(SortKey::TitleAlpha));
        assert_eq!(SortKey::parse("category"), Some(SortKey::CategoryAlpha));
        assert_eq!(SortKey::parse("popularity"), None);
    }

    #[test]
    fn test_academic_filter_date_ascending() {
        // The worked example: filter "academic", sort by date ascending.
        let output = apply(
            &sample(),
            CategoryFilter::Only(Category::Academic),
            SortKey::DateAsc,
        );
        assert_eq!(ids(&output), vec![2, 3]);
    }

    #[test]
    fn test_all_filter_passes_everything_through() {
        let output = apply(&sample(), CategoryFilter::All, SortKey::DateAsc);
        assert_eq!(ids(&output), vec![2, 3, 1]);
    }

    #[test]
    fn test_date_descending() {
        let output = apply(&sample(), CategoryFilter::All, SortKey::DateDesc);
        assert_eq!(ids(&output), vec![1, 3, 2]);
    }

    #[test]
    fn test_title_alphabetical_is_case_insensitive() {
        let mut events = sample();
        events[0].title = "zebra run".to_string();
        events[1].title = "Autumn fair".to_string();
        events[2].title = "alpha day".to_string();

        let output = apply(&events, CategoryFilter::All, SortKey::TitleAlpha);
        assert_eq!(ids(&output), vec![3, 2, 1]);
    }

    #[test]
    fn test_category_alphabetical_is_stable() {
        // Two academic events keep their relative input order.
        let events = vec![
            event(1, Category::Sports, "2025-09-10"),
            event(2, Category::Academic, "2025-07-15"),
            event(3, Category::Academic, "2025-07-20"),
            event(4, Category::Cultural, "2025-08-05"),
        ];

        let output = apply(&events, CategoryFilter::All, SortKey::CategoryAlpha);
        assert_eq!(ids(&output), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_equal_dates_preserve_input_order() {
        let events = vec![
            event(7, Category::Academic, "2025-07-15"),
            event(8, Category::Cultural, "2025-07-15"),
            event(9, Category::Sports, "2025-07-15"),
        ];

        let output = apply(&events, CategoryFilter::All, SortKey::DateAsc);
        assert_eq!(ids(&output), vec![7, 8, 9]);

        let output = apply(&events, CategoryFilter::All, SortKey::DateDesc);
        assert_eq!(ids(&output), vec![7, 8, 9]);
    }

    #[test]
    fn test_malformed_dates_sort_last_both_directions() {
        let events = vec![
            event(1, Category::Academic, "not-a-date"),
            event(2, Category::Academic, "2025-07-15"),
            event(3, Category::Academic, "2025-07-20"),
        ];

        let asc = apply(&events, CategoryFilter::All, SortKey::DateAsc);
        assert_eq!(ids(&asc), vec![2, 3, 1]);

        let desc = apply(&events, CategoryFilter::All, SortKey::DateDesc);
        assert_eq!(ids(&desc), vec![3, 2, 1]);
    }

    #[test]
    fn test_apply_never_mutates_input() {
        let events = sample();
        let before = events.clone();
        let _ = apply(&events, CategoryFilter::Only(Category::Academic), SortKey::DateDesc);
        assert_eq!(events, before);
    }

    #[test]
    fn test_apply_is_deterministic() {
        let events = sample();
        let first = apply(&events, CategoryFilter::All, SortKey::CategoryAlpha);
        let second = apply(&events, CategoryFilter::All, SortKey::CategoryAlpha);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let events = vec![event(1, Category::Sports, "2025-09-10")];
        let output = apply(&events, CategoryFilter::Only(Category::Cultural), SortKey::DateAsc);
        assert!(output.is_empty());
    }

    #[test]
    fn test_split_by_date() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let events = sample();
        let (upcoming, past) = split_by_date(&events, today);

        assert_eq!(ids(&upcoming), vec![1]);
        assert_eq!(ids(&past), vec![2, 3]);
    }

    #[test]
    fn test_split_by_date_today_is_upcoming() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        let events = vec![event(2, Category::Academic, "2025-07-15")];
        let (upcoming, past) = split_by_date(&events, today);

        assert_eq!(upcoming.len(), 1);
        assert!(past.is_empty());
    }

    #[test]
    fn test_split_by_date_malformed_goes_past() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let events = vec![event(1, Category::Sports, "???")];
        let (upcoming, past) = split_by_date(&events, today);

        assert!(upcoming.is_empty());
        assert_eq!(past.len(), 1);
    }

    #[test]
    fn test_views_share_filter_and_sort() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let mut events = sample();
        events.push(event(4, Category::Academic, "2025-06-01"));

        let views = EventViews::build(
            &events,
            CategoryFilter::Only(Category::Academic),
            SortKey::DateAsc,
            today,
        );

        assert!(views.upcoming.is_empty());
        assert_eq!(ids(&views.past), vec![4, 2, 3]);
        assert_eq!(views.total(), 3);
        assert!(!views.is_empty());
    }
}
