// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events: immutable, timestamped, typed records
//!
//! The log stores type-erased [`EventRecord`]s so any crate can add new
//! event subtypes by implementing [`EventKind`]. Queries hand back the
//! typed view, [`Event<T>`].

use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Name of the package that emitted (or may query) events
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(pub String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for PackageName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&PackageName> for PackageName {
    fn from(name: &PackageName) -> Self {
        name.clone()
    }
}

/// An event subtype.
///
/// Implemented by payload types. `NAME` identifies the subtype in logs and
/// error messages; type identity (not the name) decides query matches.
pub trait EventKind: fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;
}

/// Metadata stamped on every event when it is appended
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventMeta {
    /// Position in the log, starting at 1
    pub sequence: u64,
    pub emitting_package: PackageName,
    pub occurred_at: DateTime<Utc>,
}

trait Payload: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: EventKind> Payload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// A logged event with its payload type erased
#[derive(Clone)]
pub struct EventRecord {
    meta: EventMeta,
    kind: &'static str,
    payload: Arc<dyn Payload>,
}

impl EventRecord {
    pub(crate) fn new<T: EventKind>(meta: EventMeta, payload: T) -> Self {
        Self {
            meta,
            kind: T::NAME,
            payload: Arc::new(payload),
        }
    }

    pub fn meta(&self) -> &EventMeta {
        &self.meta
    }

    pub fn sequence(&self) -> u64 {
        self.meta.sequence
    }

    pub fn emitting_package(&self) -> &PackageName {
        &self.meta.emitting_package
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.meta.occurred_at
    }

    /// Name of the event subtype
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Check whether the payload is a `T`
    pub fn is<T: EventKind>(&self) -> bool {
        self.payload.as_any().is::<T>()
    }

    /// Typed view of this record, if the payload is a `T`
    pub fn downcast<T: EventKind>(&self) -> Option<Event<T>> {
        let payload = Arc::clone(&self.payload).into_any().downcast::<T>().ok()?;
        Some(Event {
            meta: self.meta.clone(),
            payload,
        })
    }
}

impl fmt::Debug for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRecord")
            .field("kind", &self.kind)
            .field("meta", &self.meta)
            .field("payload", &self.payload)
            .finish()
    }
}

/// A logged event of subtype `T`
pub struct Event<T> {
    meta: EventMeta,
    payload: Arc<T>,
}

impl<T> Event<T> {
    /// Build a typed event outside the log, e.g. to exercise a predicate
    pub fn new(meta: EventMeta, payload: T) -> Self {
        Self {
            meta,
            payload: Arc::new(payload),
        }
    }

    pub fn meta(&self) -> &EventMeta {
        &self.meta
    }

    pub fn sequence(&self) -> u64 {
        self.meta.sequence
    }

    pub fn emitting_package(&self) -> &PackageName {
        &self.meta.emitting_package
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.meta.occurred_at
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> Arc<T> {
        self.payload
    }
}

impl<T> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            payload: Arc::clone(&self.payload),
        }
    }
}

impl<T> Deref for Event<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.payload
    }
}

impl<T: fmt::Debug> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("meta", &self.meta)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta && self.payload == other.payload
    }
}

impl<T: Eq> Eq for Event<T> {}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
