//! Event log reset specs
//!
//! A reset hides earlier events from default reads without erasing history.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn log_with_clock() -> (EventLog, FakeClock) {
    init_tracing();
    let clock = FakeClock::at(Utc.timestamp_opt(1_000, 0).unwrap());
    let log = EventLog::builder(OWN_PACKAGE).clock(clock.clone()).build();
    (log, clock)
}

#[test]
fn reset_get_does_not_return_logs() {
    let (log, clock) = log_with_clock();
    log_custom(&log, TAG_1, DATA_1);
    clock.advance(Duration::from_secs(1));

    log.reset();

    assert!(custom_cursor(&log).get().is_none());
}

#[test]
fn reset_next_does_not_return_logs() {
    let (log, clock) = log_with_clock();
    log_custom(&log, TAG_1, DATA_1);
    clock.advance(Duration::from_secs(1));

    log.reset();

    assert!(custom_cursor(&log).next().is_none());
}

#[test]
fn reset_poll_does_not_return_logs() {
    let (log, clock) = log_with_clock();
    log_custom(&log, TAG_1, DATA_1);
    clock.advance(Duration::from_secs(1));

    log.reset();

    assert!(custom_cursor(&log).poll(VERY_SHORT_POLL_WAIT).is_none());
}

#[test]
fn reset_applies_to_cursors_opened_before_it() {
    let (log, clock) = log_with_clock();
    let cursor = custom_cursor(&log);
    log_custom(&log, TAG_1, DATA_1);
    clock.advance(Duration::from_secs(1));

    log.reset();
    clock.advance(Duration::from_secs(1));
    log_custom(&log, TAG_1, DATA_2);

    assert_eq!(data_of(cursor.next()), Some(DATA_2.to_string()));
}

#[test]
fn history_survives_reset() {
    let (log, clock) = log_with_clock();
    let first_logged_at = log.now();
    log_custom(&log, TAG_1, DATA_1);
    clock.advance(Duration::from_secs(1));

    log.reset();

    assert_eq!(log.len(), 1);
    let cursor = custom_cursor(&log);
    assert_eq!(
        data_of(cursor.get_since(first_logged_at)),
        Some(DATA_1.to_string())
    );
}

#[test]
fn reset_without_clock_moving_hides_logs() {
    let (log, _clock) = log_with_clock();
    log_custom(&log, TAG_1, DATA_1);

    log.reset();

    let cursor = custom_cursor(&log);
    assert!(cursor.get().is_none());
    assert!(cursor.next().is_none());
}

#[test]
fn event_logged_after_reset_is_visible_when_clock_steps_back() {
    let (log, clock) = log_with_clock();
    log_custom(&log, TAG_1, DATA_1);
    log.reset();
    clock.set(Utc.timestamp_opt(999, 0).unwrap());

    log_custom(&log, TAG_1, DATA_2);

    assert_eq!(data_of(custom_cursor(&log).poll(VERY_SHORT_POLL_WAIT)), Some(DATA_2.to_string()));
}
