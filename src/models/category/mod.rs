//! Category model for classifying events.
//!
//! Categories are a closed set driving both filter membership and display
//! (badge color, icon, localized label). The original portal repeated a
//! `switch` per page for labels and colors; here both live in one lookup
//! table on the enum.

use serde::{Deserialize, Serialize};

use super::locale::{Locale, Localized};

/// Closed classification of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Cultural,
    Sports,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Academic, Category::Cultural, Category::Sports];

    /// Parse a category code as it appears in event data.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "academic" => Some(Self::Academic),
            "cultural" => Some(Self::Cultural),
            "sports" => Some(Self::Sports),
            _ => None,
        }
    }

    /// Stable wire/data code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Cultural => "cultural",
            Self::Sports => "sports",
        }
    }

    /// Localized display label.
    pub fn label(&self, locale: Locale) -> &'static str {
        self.localized_label().get(locale)
    }

    fn localized_label(&self) -> Localized {
        match self {
            Self::Academic => Localized::new("Academic", "Học thuật"),
            Self::Cultural => Localized::new("Cultural", "Văn hóa"),
            Self::Sports => Localized::new("Sports", "Thể thao"),
        }
    }

    /// Hex badge color for the category.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Academic => "#3B82F6",
            Self::Cultural => "#8B5CF6",
            Self::Sports => "#10B981",
        }
    }

    /// Emoji icon for the category overview cards.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Academic => "🎓",
            Self::Cultural => "🎭",
            Self::Sports => "🏆",
        }
    }
}
