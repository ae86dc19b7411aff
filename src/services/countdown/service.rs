//! Countdown computation.
//!
//! All functions take `now` as a parameter so the engine is fully
//! deterministic under test; only the ticker thread ever reads the clock.

use chrono::NaiveDateTime;

use super::models::{CountdownState, TimeRemaining};
use crate::utils::date;

/// The instant an event starts: its calendar date combined with the
/// start of its time range ("10:00 - 16:00" targets 10:00; a string
/// without the " - " separator is used whole). `None` when either part
/// is malformed.
pub fn target_instant(event_date: &str, event_time: &str) -> Option<NaiveDateTime> {
    date::combine(event_date, event_time)
}

/// Evaluate a target against `now`.
///
/// Total over all inputs: a missing target (malformed source data) or a
/// target at or before `now` is `Expired`; anything else counts down,
/// with the breakdown floored to whole seconds.
pub fn evaluate(target: Option<NaiveDateTime>, now: NaiveDateTime) -> CountdownState {
    let Some(target) = target else {
        return CountdownState::Expired;
    };

    let remaining_ms = target.signed_duration_since(now).num_milliseconds();
    if remaining_ms <= 0 {
        return CountdownState::Expired;
    }

    CountdownState::Counting(TimeRemaining::from_seconds(remaining_ms / 1_000))
}

/// Tracks one event's countdown target and its last computed state.
///
/// Retargeting recomputes immediately rather than waiting for the next
/// tick, so a freshly selected event never renders a stale breakdown.
/// For a fixed target the Counting to Expired transition is one-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    target: Option<NaiveDateTime>,
    state: CountdownState,
}

impl Countdown {
    /// Start tracking an event's start instant, evaluated against `now`.
    pub fn new(event_date: &str, event_time: &str, now: NaiveDateTime) -> Self {
        let target = target_instant(event_date, event_time);
        Self {
            target,
            state: evaluate(target, now),
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn target(&self) -> Option<NaiveDateTime> {
        self.target
    }

    /// Point at a new target and recompute immediately. The state resets
    /// to whatever the fresh computation yields, expired or not.
    pub fn set_target(&mut self, event_date: &str, event_time: &str, now: NaiveDateTime) -> CountdownState {
        self.target = target_instant(event_date, event_time);
        self.state = evaluate(self.target, now);
        self.state
    }

    /// Recompute against `now`, returning the new state only when it
    /// changed. An expired target never resumes counting, even if the
    /// clock is stepped backwards.
    pub fn tick(&mut self, now: NaiveDateTime) -> Option<CountdownState> {
        if self.state.is_expired() {
            return None;
        }

        let next = evaluate(self.target, now);
        if next == self.state {
            return None;
        }

        self.state = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_target_instant_splits_time_range() {
        assert_eq!(
            target_instant("2030-01-01", "10:00 - 16:00"),
            Some(at(2030, 1, 1, 10, 0, 0))
        );
    }

    #[test]
    fn test_target_instant_accepts_bare_start_time() {
        assert_eq!(target_instant("2030-01-01", "10:00"), Some(at(2030, 1, 1, 10, 0, 0)));
    }

    #[test]
    fn test_target_instant_malformed_input() {
        assert_eq!(target_instant("soon", "10:00"), None);
        assert_eq!(target_instant("2030-01-01", "midmorning"), None);
    }

    #[test]
    fn test_evaluate_future_target_counts_down() {
        let now = at(2029, 12, 31, 10, 0, 0);
        let target = target_instant("2030-01-01", "10:00 - 16:00");

        // Exactly 24 hours out under the start-time-only combination rule.
        match evaluate(target, now) {
            CountdownState::Counting(remaining) => {
                assert_eq!(remaining.days, 1);
                assert_eq!(remaining.hours, 0);
                assert_eq!(remaining.minutes, 0);
                assert_eq!(remaining.seconds, 0);
            }
            CountdownState::Expired => panic!("target a day away must be counting"),
        }
    }

    #[test]
    fn test_evaluate_breakdown_matches_floor_of_difference() {
        let now = at(2030, 1, 1, 8, 30, 15);
        let target = Some(at(2030, 1, 3, 10, 0, 0));

        let expected_seconds = (at(2030, 1, 3, 10, 0, 0) - now).num_seconds();
        match evaluate(target, now) {
            CountdownState::Counting(remaining) => {
                assert_eq!(remaining.total_seconds(), expected_seconds)
            }
            CountdownState::Expired => panic!("future target must be counting"),
        }
    }

    #[test]
    fn test_evaluate_target_at_now_is_expired() {
        let now = at(2030, 1, 1, 10, 0, 0);
        assert_eq!(evaluate(Some(now), now), CountdownState::Expired);
    }

    #[test]
    fn test_evaluate_past_target_is_expired() {
        let now = at(2030, 1, 1, 10, 0, 1);
        let target = Some(at(2030, 1, 1, 10, 0, 0));
        assert_eq!(evaluate(target, now), CountdownState::Expired);
    }

    #[test]
    fn test_evaluate_missing_target_is_expired() {
        let now = at(2030, 1, 1, 10, 0, 0);
        assert_eq!(evaluate(None, now), CountdownState::Expired);
    }

    #[test]
    fn test_new_computes_immediately() {
        let now = at(2029, 12, 31, 10, 0, 0);
        let countdown = Countdown::new("2030-01-01", "10:00 - 16:00", now);
        assert!(!countdown.state().is_expired());
        assert_eq!(countdown.state().remaining().total_seconds(), 86_400);
    }

    #[test]
    fn test_new_with_malformed_input_is_expired() {
        let now = at(2030, 1, 1, 0, 0, 0);
        let countdown = Countdown::new("someday", "10:00", now);
        assert!(countdown.state().is_expired());
        assert!(countdown.target().is_none());
    }

    #[test]
    fn test_tick_reports_changes_only() {
        let now = at(2029, 12, 31, 10, 0, 0);
        let mut countdown = Countdown::new("2030-01-01", "10:00", now);

        // Same instant: nothing changed.
        assert_eq!(countdown.tick(now), None);

        let later = at(2029, 12, 31, 10, 0, 1);
        match countdown.tick(later) {
            Some(CountdownState::Counting(remaining)) => {
                assert_eq!(remaining.total_seconds(), 86_399)
            }
            other => panic!("expected an updated counting state, got {other:?}"),
        }
    }

    #[test]
    fn test_tick_crosses_into_expired() {
        let now = at(2030, 1, 1, 9, 59, 59);
        let mut countdown = Countdown::new("2030-01-01", "10:00", now);
        assert!(!countdown.state().is_expired());

        let at_start = at(2030, 1, 1, 10, 0, 0);
        assert_eq!(countdown.tick(at_start), Some(CountdownState::Expired));
        assert!(countdown.state().is_expired());
    }

    #[test]
    fn test_expired_is_one_way_for_fixed_target() {
        let now = at(2030, 1, 1, 10, 0, 1);
        let mut countdown = Countdown::new("2030-01-01", "10:00", now);
        assert!(countdown.state().is_expired());

        // Clock stepped backwards: still expired, no change reported.
        let earlier = at(2030, 1, 1, 9, 0, 0);
        assert_eq!(countdown.tick(earlier), None);
        assert!(countdown.state().is_expired());
    }

    #[test]
    fn test_set_target_resets_immediately() {
        let now = at(2030, 1, 1, 10, 0, 1);
        let mut countdown = Countdown::new("2030-01-01", "10:00", now);
        assert!(countdown.state().is_expired());

        // Selecting a future event flips the state without a tick.
        let state = countdown.set_target("2030-02-01", "09:00 - 12:00", now);
        assert!(!state.is_expired());
        assert_eq!(countdown.target(), Some(at(2030, 2, 1, 9, 0, 0)));

        // And selecting a past one flips it back.
        let state = countdown.set_target("2029-01-01", "09:00", now);
        assert!(state.is_expired());
    }
}
