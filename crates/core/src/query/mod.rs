// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed, package-scoped queries over the event log
//!
//! A [`Query`] names the event subtype, the package whose events it reads
//! and any extra predicates. Reads go through a [`Cursor`] obtained from
//! the query; each cursor keeps its own position in the log.

pub(crate) mod buffer;
mod cursor;

pub use cursor::Cursor;

use crate::error::QueryError;
use crate::event::{Event, EventKind, EventRecord, PackageName};
use crate::log::EventLog;
use std::fmt;
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&Event<T>) -> bool + Send + Sync>;

/// A filter over events of subtype `T` emitted by one package
pub struct Query<T> {
    log: EventLog,
    package: PackageName,
    filters: Vec<Predicate<T>>,
}

impl<T: EventKind> Query<T> {
    /// Query `T` events emitted by `package`.
    ///
    /// `package` must be the log's own package: a process may not observe
    /// another package's events.
    pub fn new(log: &EventLog, package: impl Into<PackageName>) -> Result<Self, QueryError> {
        let package = package.into();
        if package.is_empty() {
            return Err(QueryError::EmptyPackage);
        }
        if &package != log.package() {
            return Err(QueryError::ForeignPackage {
                requested: package,
                owner: log.package().clone(),
            });
        }

        Ok(Self {
            log: log.clone(),
            package,
            filters: Vec::new(),
        })
    }

    /// Query `T` events emitted by the log's own package.
    ///
    /// Fails only if the log was created with an empty package name.
    pub fn own(log: &EventLog) -> Result<Self, QueryError> {
        Self::new(log, log.package())
    }

    /// Add a predicate; an event matches only if every predicate holds
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Event<T>) -> bool + Send + Sync + 'static,
    {
        self.filters.push(Arc::new(predicate));
        self
    }

    pub fn package(&self) -> &PackageName {
        &self.package
    }

    /// Name of the queried event subtype
    pub fn kind(&self) -> &'static str {
        T::NAME
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Check the caller-supplied predicates only
    pub fn filter_all(&self, event: &Event<T>) -> bool {
        self.filters.iter().all(|predicate| predicate(event))
    }

    /// Typed event if `record` has subtype `T`, comes from the queried
    /// package and satisfies every predicate
    pub fn matches(&self, record: &EventRecord) -> Option<Event<T>> {
        if record.emitting_package() != &self.package {
            return None;
        }
        let event = record.downcast::<T>()?;
        self.filter_all(&event).then_some(event)
    }

    /// Open a cursor seeded with the log's current history
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::open(self.clone())
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            log: self.log.clone(),
            package: self.package.clone(),
            filters: self.filters.clone(),
        }
    }
}

impl<T: EventKind> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("kind", &T::NAME)
            .field("package", &self.package)
            .field("filters", &self.filters.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
