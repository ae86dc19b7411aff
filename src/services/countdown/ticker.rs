//! Thread-backed countdown ticker.
//!
//! One ticker drives one displayed countdown, recomputing once per
//! interval and invoking its callback on every state change. Cancellation
//! is part of the contract: a display that goes away must stop its ticker
//! (dropping the handle does this), and the process-wide gauge exists so
//! tests can assert that no ticker outlives its display.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;

use super::models::CountdownState;
use super::service::Countdown;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Ticker threads currently alive in this process.
static ACTIVE_TICKERS: AtomicUsize = AtomicUsize::new(0);

/// How many ticker threads are currently running.
pub fn active_ticker_count() -> usize {
    ACTIVE_TICKERS.load(Ordering::SeqCst)
}

/// Decrements the gauge when the ticker thread exits, however it exits.
struct TickerGauge;

impl Drop for TickerGauge {
    fn drop(&mut self) {
        ACTIVE_TICKERS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A cancellable once-per-second countdown recomputation.
pub struct CountdownTicker {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Spawn a ticker for an event's start instant with the standard
    /// one-second interval. The callback receives the initial state
    /// immediately, then every subsequent change until cancellation.
    pub fn spawn<F>(event_date: &str, event_time: &str, on_change: F) -> Result<Self>
    where
        F: FnMut(CountdownState) + Send + 'static,
    {
        Self::spawn_with_interval(event_date, event_time, TICK_INTERVAL, on_change)
    }

    /// Spawn with an explicit interval. Tests use short intervals.
    pub fn spawn_with_interval<F>(
        event_date: &str,
        event_time: &str,
        interval: Duration,
        mut on_change: F,
    ) -> Result<Self>
    where
        F: FnMut(CountdownState) + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let mut countdown = Countdown::new(event_date, event_time, Local::now().naive_local());

        ACTIVE_TICKERS.fetch_add(1, Ordering::SeqCst);
        let spawned = thread::Builder::new()
            .name("countdown-ticker".to_string())
            .spawn(move || {
                let _gauge = TickerGauge;

                // Deliver the initial state before the first sleep so a
                // fresh display never starts stale.
                on_change(countdown.state());

                loop {
                    thread::sleep(interval);
                    if flag.load(Ordering::SeqCst) {
                        break;
                    }
                    if let Some(state) = countdown.tick(Local::now().naive_local()) {
                        on_change(state);
                    }
                }
            });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(err) => {
                ACTIVE_TICKERS.fetch_sub(1, Ordering::SeqCst);
                return Err(err).context("failed to spawn countdown ticker thread");
            }
        };

        Ok(Self {
            cancelled,
            handle: Some(handle),
        })
    }

    /// Stop the recurring recomputation. Idempotent; the thread exits
    /// within one interval and no callback fires after it does.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("countdown ticker thread panicked");
            }
        }
    }
}
