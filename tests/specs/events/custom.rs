//! Custom event specs
//!
//! Tag and data refinements on custom event queries.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn with_tag_returns_event_with_that_tag() {
    let log = own_log();
    log_custom(&log, TAG_2, DATA_2);
    log_custom(&log, TAG_1, DATA_1);

    let event = CustomEvent::query(&log, OWN_PACKAGE)
        .unwrap()
        .with_tag(TAG_1)
        .cursor()
        .get()
        .unwrap();

    assert_eq!(event.tag.as_deref(), Some(TAG_1));
    assert_eq!(event.data.as_deref(), Some(DATA_1));
}

#[test]
fn with_tag_and_data_must_both_match() {
    let log = own_log();
    log_custom(&log, TAG_1, DATA_2);
    log_custom(&log, TAG_2, DATA_1);
    log_custom(&log, TAG_1, DATA_1);

    let cursor = CustomEvent::query(&log, OWN_PACKAGE)
        .unwrap()
        .with_tag(TAG_1)
        .with_data(DATA_1)
        .cursor();

    let event = cursor.next().unwrap();
    assert_eq!(event.sequence(), 3);
    assert!(cursor.next().is_none());
}

#[test]
fn nothing_logged_returns_nothing() {
    let log = own_log();
    let cursor = custom_cursor(&log);

    assert!(cursor.get().is_none());
    assert!(cursor.next().is_none());
    assert!(cursor.poll(VERY_SHORT_POLL_WAIT).is_none());
}

#[test]
fn events_without_tag_do_not_match_tag_filter() {
    let log = own_log();
    CustomEvent::logger(&log).data(DATA_1).log();

    let cursor = CustomEvent::query(&log, OWN_PACKAGE)
        .unwrap()
        .with_tag(TAG_1)
        .cursor();

    assert!(cursor.get().is_none());
}

#[test]
fn logged_event_carries_emitting_package_and_sequence() {
    let log = own_log();
    let record = CustomEvent::logger(&log).tag(TAG_1).log();

    let event = custom_cursor(&log).get().unwrap();

    assert_eq!(event.emitting_package().as_str(), OWN_PACKAGE);
    assert_eq!(event.sequence(), record.sequence());
    assert_eq!(event.occurred_at(), record.occurred_at());
}
