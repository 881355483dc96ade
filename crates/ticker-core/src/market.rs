// File: crates/ticker-core/src/market.rs
// Summary: Market-open test against regular session bounds, with an injectable clock.

use std::cell::Cell;

/// Regular trading hours for the current day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SessionBounds {
    /// Session open, epoch seconds.
    pub start: i64,
    /// Session close, epoch seconds.
    pub end: i64,
    /// Exchange offset from GMT, seconds.
    pub gmt_offset: i64,
}

/// Source of the current time in epoch seconds.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Clock pinned to a settable instant.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<i64>,
}

impl FixedClock {
    pub fn new(now: i64) -> Self {
        Self { now: Cell::new(now) }
    }
    pub fn set(&self, now: i64) {
        self.now.set(now);
    }
    pub fn advance(&self, secs: i64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

/// True when `now + gmt_offset` lies strictly inside `(start, end)`.
/// The open and close instants themselves count as closed.
pub fn is_open(now: i64, gmt_offset: i64, start: i64, end: i64) -> bool {
    let localized = now + gmt_offset;
    start < localized && localized < end
}

/// Reads its clock afresh on every evaluation.
pub struct MarketStatusEvaluator<C> {
    clock: C,
}

impl<C: Clock> MarketStatusEvaluator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn is_open(&self, session: &SessionBounds) -> bool {
        is_open(self.clock.now(), session.gmt_offset, session.start, session.end)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
