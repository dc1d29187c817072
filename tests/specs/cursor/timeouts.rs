//! Cursor blocking and timeout specs
//!
//! `poll` waits at most its timeout in total and returns as soon as a
//! matching event is logged.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn poll_logged_after_returns_event() {
    let log = own_log();
    let cursor = CustomEvent::query(&log, OWN_PACKAGE)
        .unwrap()
        .with_tag(TAG_1)
        .cursor();

    let producer = log_custom_later(&log, Duration::from_millis(100), TAG_1, DATA_1);

    assert_eq!(data_of(cursor.poll(LONG_POLL_WAIT)), Some(DATA_1.to_string()));
    producer.join().unwrap();
}

#[test]
fn poll_logged_too_late_returns_nothing() {
    let log = own_log();
    let cursor = custom_cursor(&log);

    let producer = log_custom_later(&log, Duration::from_millis(500), TAG_1, DATA_1);

    assert_eq!(data_of(cursor.poll(VERY_SHORT_POLL_WAIT)), None);
    producer.join().unwrap();
}

#[test]
fn get_and_next_do_not_wait_for_later_events() {
    let log = own_log();
    let cursor = custom_cursor(&log);

    let producer = log_custom_later(&log, Duration::from_millis(200), TAG_1, DATA_1);

    let start = Instant::now();
    assert!(cursor.get().is_none());
    assert!(cursor.next().is_none());
    assert!(start.elapsed() < Duration::from_millis(200));
    producer.join().unwrap();
}

#[test]
fn poll_total_wait_is_bounded_by_timeout_despite_wakeups() {
    let log = own_log();
    let cursor = CustomEvent::query(&log, OWN_PACKAGE)
        .unwrap()
        .with_tag("never")
        .cursor();
    let timeout = Duration::from_millis(250);

    let noise = {
        let log = log.clone();
        std::thread::spawn(move || {
            for i in 0..40 {
                log_custom(&log, TAG_2, &i.to_string());
                std::thread::sleep(Duration::from_millis(10));
            }
        })
    };

    let start = Instant::now();
    assert!(cursor.poll(timeout).is_none());
    let elapsed = start.elapsed();
    noise.join().unwrap();

    assert!(elapsed >= timeout, "returned early after {:?}", elapsed);
    assert!(
        elapsed < timeout + Duration::from_millis(500),
        "waited {:?}",
        elapsed
    );
}

#[test]
fn poll_or_fail_no_event_errors() {
    let log = own_log();
    let cursor = custom_cursor(&log);

    let err = cursor.poll_or_fail(VERY_SHORT_POLL_WAIT).unwrap_err();

    assert!(matches!(err, PollError::Timeout { .. }));
    assert!(err.to_string().contains(OWN_PACKAGE));
}

#[test]
fn poll_or_fail_logged_after_returns_event() {
    let log = own_log();
    let cursor = custom_cursor(&log);

    let producer = log_custom_later(&log, Duration::from_millis(100), TAG_1, DATA_1);

    assert!(cursor.poll_or_fail(LONG_POLL_WAIT).is_ok());
    producer.join().unwrap();
}

#[test]
fn many_waiters_are_all_woken() {
    let log = own_log();
    let waiters: Vec<_> = (0..8)
        .map(|_| {
            let cursor = custom_cursor(&log);
            std::thread::spawn(move || data_of(cursor.poll(LONG_POLL_WAIT)))
        })
        .collect();

    std::thread::sleep(Duration::from_millis(50));
    log_custom(&log, TAG_1, DATA_1);

    for waiter in waiters {
        assert_eq!(waiter.join().unwrap(), Some(DATA_1.to_string()));
    }
}

#[tokio::test]
async fn poll_async_does_not_block_the_runtime() {
    let log = own_log();
    let cursor = custom_cursor(&log);

    let producer = {
        let log = log.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            log_custom(&log, TAG_1, DATA_1);
        })
    };

    let event = cursor.poll_async(LONG_POLL_WAIT).await;
    producer.await.unwrap();

    assert_eq!(data_of(event), Some(DATA_1.to_string()));
}

#[test]
fn wait_uses_configured_default_timeout() {
    init_tracing();
    let log = EventLog::with_config(
        OWN_PACKAGE,
        EventLogConfig::default().with_default_poll_timeout(Duration::from_millis(50)),
    );
    let cursor = custom_cursor(&log);

    let start = Instant::now();
    let err = cursor.wait_or_fail().unwrap_err();

    assert!(start.elapsed() >= Duration::from_millis(50));
    assert!(err.to_string().ends_with("within 50ms"), "{}", err);
    assert!(cursor.wait().is_none());
}
