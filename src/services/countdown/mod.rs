mod models;
mod service;
mod ticker;

pub use models::{CountdownSegment, CountdownState, CountdownUnit, TimeRemaining};
pub use service::{evaluate, target_instant, Countdown};
pub use ticker::{active_ticker_count, CountdownTicker};
