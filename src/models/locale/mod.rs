//! Locale support for the portal.
//!
//! The original portal shipped one copy of every page per language, each
//! with its own duplicated mock data. Here the data layer is written once
//! and parameterized: records carry `Localized` string pairs and the
//! display layer picks the side matching the active `Locale`.

use serde::{Deserialize, Serialize};

/// Languages the portal is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Vi,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl Locale {
    /// Parse a locale code ("en" or "vi").
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "vi" => Some(Self::Vi),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }
}

/// A pair of static strings keyed by locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub vi: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, vi: &'static str) -> Self {
        Self { en, vi }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Vi => self.vi,
        }
    }
}

/// Fixed interface strings shared by the display layer.
pub mod strings {
    use super::Localized;

    pub const UPCOMING_TAB: Localized = Localized::new("Upcoming", "Sắp tới");
    pub const PAST_TAB: Localized = Localized::new("Past", "Đã diễn ra");
    pub const NO_UPCOMING_EVENTS: Localized = Localized::new(
        "There are no upcoming events right now.",
        "Hiện tại chưa có sự kiện sắp tới nào.",
    );
    pub const NO_PAST_EVENTS: Localized = Localized::new(
        "No events have taken place yet.",
        "Chưa có sự kiện nào đã diễn ra.",
    );
    pub const EVENT_STARTED: Localized = Localized::new("Event has started", "Sự kiện đã bắt đầu");
    pub const STARTS_IN: Localized = Localized::new("Starts in", "Bắt đầu sau");
    pub const TOTAL_EVENTS: Localized = Localized::new("Total", "Tổng");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("vi"), Some(Locale::Vi));
        assert_eq!(Locale::parse(" VI "), Some(Locale::Vi));
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_localized_picks_matching_side() {
        let text = Localized::new("Hello", "Xin chào");
        assert_eq!(text.get(Locale::En), "Hello");
        assert_eq!(text.get(Locale::Vi), "Xin chào");
    }

    #[test]
    fn test_code_round_trips() {
        for locale in [Locale::En, Locale::Vi] {
            assert_eq!(Locale::parse(locale.code()), Some(locale));
        }
    }
}
