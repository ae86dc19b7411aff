use serde::Serialize;

use crate::models::locale::Locale;

/// Remaining time until an event starts, decomposed for display.
///
/// Decomposition is floor division at every level: whole days, then
/// hours within the day, minutes within the hour, seconds within the
/// minute. No component is ever rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a whole number of seconds. Negative input clamps to zero.
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    /// Display segments in order. Values are two-digit zero-padded; the
    /// days segment is omitted entirely when zero, while hours, minutes
    /// and seconds always appear.
    pub fn segments(&self) -> Vec<CountdownSegment> {
        let mut segments = Vec::with_capacity(4);
        if self.days > 0 {
            segments.push(CountdownSegment::new(self.days, CountdownUnit::Days));
        }
        segments.push(CountdownSegment::new(self.hours, CountdownUnit::Hours));
        segments.push(CountdownSegment::new(self.minutes, CountdownUnit::Minutes));
        segments.push(CountdownSegment::new(self.seconds, CountdownUnit::Seconds));
        segments
    }
}

/// One displayed countdown cell: a padded value plus its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownSegment {
    pub value: String,
    pub unit: CountdownUnit,
}

impl CountdownSegment {
    fn new(value: i64, unit: CountdownUnit) -> Self {
        Self {
            value: format!("{value:02}"),
            unit,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        self.unit.label(locale)
    }
}

/// Unit of a countdown segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownUnit {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Days, Locale::En) => "Days",
            (Self::Days, Locale::Vi) => "Ngày",
            (Self::Hours, Locale::En) => "Hours",
            (Self::Hours, Locale::Vi) => "Giờ",
            (Self::Minutes, Locale::En) => "Min",
            (Self::Minutes, Locale::Vi) => "Phút",
            (Self::Seconds, Locale::En) => "Sec",
            (Self::Seconds, Locale::Vi) => "Giây",
        }
    }
}

/// State of one countdown: ticking toward its target, or past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountdownState {
    Counting(TimeRemaining),
    Expired,
}

impl CountdownState {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

    /// The remaining breakdown; all zeros once expired.
    pub fn remaining(&self) -> TimeRemaining {
        match self {
            Self::Counting(remaining) => *remaining,
            Self::Expired => TimeRemaining::ZERO,
        }
    }
}
