//! Cross-package isolation specs
//!
//! A process may only query events of its own package.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn query_for_other_package_fails_at_construction() {
    let log = own_log();

    let err = CustomEvent::query(&log, OTHER_PACKAGE).unwrap_err();

    assert_eq!(
        err,
        QueryError::ForeignPackage {
            requested: OTHER_PACKAGE.into(),
            owner: OWN_PACKAGE.into(),
        }
    );
}

#[test]
fn incorrect_package_name_fails_even_with_matching_events_logged() {
    let log = own_log();
    log.append(OTHER_PACKAGE, CustomEvent::default());

    assert!(CustomEvent::query(&log, OTHER_PACKAGE).is_err());
}

#[test]
fn own_query_never_returns_other_package_events() {
    let log = own_log();
    log.append(
        OTHER_PACKAGE,
        CustomEvent {
            tag: Some(TAG_1.to_string()),
            data: Some(DATA_1.to_string()),
        },
    );
    log_custom(&log, TAG_1, DATA_2);

    let cursor = CustomEvent::query(&log, OWN_PACKAGE)
        .unwrap()
        .with_tag(TAG_1)
        .cursor();

    assert_eq!(data_of(cursor.get()), Some(DATA_2.to_string()));
    assert_eq!(data_of(cursor.next()), Some(DATA_2.to_string()));
    assert_eq!(data_of(cursor.poll(VERY_SHORT_POLL_WAIT)), None);
}

#[test]
fn empty_package_name_fails() {
    let log = own_log();
    assert_eq!(
        CustomEvent::query(&log, "").unwrap_err(),
        QueryError::EmptyPackage
    );
}
