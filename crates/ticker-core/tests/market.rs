// File: crates/ticker-core/tests/market.rs
// Purpose: Strict session-bounds test and clock re-reads.

use ticker_core::market::is_open;
use ticker_core::{FixedClock, MarketStatusEvaluator, SessionBounds};

#[test]
fn inside_and_outside_session() {
    assert!(is_open(1000, 0, 900, 1100));
    assert!(!is_open(1200, 0, 900, 1100));
    assert!(!is_open(800, 0, 900, 1100));
}

#[test]
fn boundaries_count_as_closed() {
    assert!(!is_open(900, 0, 900, 1100));
    assert!(!is_open(1100, 0, 900, 1100));
    assert!(is_open(901, 0, 900, 1100));
    assert!(is_open(1099, 0, 900, 1100));
}

#[test]
fn gmt_offset_shifts_now() {
    // 1200 is past the close, but an offset of -150 brings it back inside
    assert!(is_open(1200, -150, 900, 1100));
    assert!(!is_open(1000, -100, 900, 1100));
    assert!(!is_open(1000, 100, 900, 1100));
}

#[test]
fn evaluator_reads_the_clock_every_time() {
    let session = SessionBounds { start: 900, end: 1100, gmt_offset: 0 };
    let clock = FixedClock::new(1000);
    let status = MarketStatusEvaluator::new(&clock);
    assert!(status.is_open(&session));

    clock.advance(150);
    assert!(!status.is_open(&session));

    clock.set(950);
    assert!(status.is_open(&session));
}
