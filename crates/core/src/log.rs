// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only event log with fan-out to live cursors

use crate::clock::{Clock, SystemClock};
use crate::config::EventLogConfig;
use crate::event::{EventKind, EventMeta, EventRecord, PackageName};
use crate::query::buffer::CursorBuffer;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Identifies a cursor registered with a log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorId(pub u64);

impl fmt::Display for CursorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cursor-{}", self.0)
    }
}

/// The process-wide store of logged events.
///
/// Cloning is cheap and yields a handle to the same log. The harness that
/// owns the process creates one and hands it to producers and consumers.
#[derive(Clone)]
pub struct EventLog {
    shared: Arc<Shared>,
}

struct Shared {
    package: PackageName,
    config: EventLogConfig,
    clock: Arc<dyn Clock>,
    state: Mutex<LogState>,
}

#[derive(Default)]
struct LogState {
    records: Vec<EventRecord>,
    /// Live cursors. Weak so an abandoned cursor is never kept alive.
    subscribers: HashMap<CursorId, Weak<CursorBuffer>>,
    next_cursor: u64,
    /// Sequence of the last event hidden by `reset`; 0 if never reset
    reset_seq: u64,
}

/// Builder for an [`EventLog`] with non-default config or clock
pub struct EventLogBuilder {
    package: PackageName,
    config: EventLogConfig,
    clock: Arc<dyn Clock>,
}

impl EventLogBuilder {
    pub fn config(mut self, config: EventLogConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn build(self) -> EventLog {
        EventLog {
            shared: Arc::new(Shared {
                package: self.package,
                config: self.config,
                clock: self.clock,
                state: Mutex::new(LogState::default()),
            }),
        }
    }
}

impl EventLog {
    /// Create a log owned by `package` with default config and system clock
    pub fn new(package: impl Into<PackageName>) -> Self {
        Self::builder(package).build()
    }

    pub fn with_config(package: impl Into<PackageName>, config: EventLogConfig) -> Self {
        Self::builder(package).config(config).build()
    }

    pub fn builder(package: impl Into<PackageName>) -> EventLogBuilder {
        EventLogBuilder {
            package: package.into(),
            config: EventLogConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// The package this process runs as; queries are restricted to it
    pub fn package(&self) -> &PackageName {
        &self.shared.package
    }

    pub fn config(&self) -> &EventLogConfig {
        &self.shared.config
    }

    /// Current time on the log's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.shared.clock.now()
    }

    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.shared.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an event emitted by `package` and push it to every live cursor.
    ///
    /// Storing and fan-out happen under one lock, so a cursor registering
    /// concurrently sees the event exactly once: in its seed or by push.
    pub fn append<T: EventKind>(&self, package: impl Into<PackageName>, payload: T) -> EventRecord {
        let emitting_package = package.into();
        let mut state = self.lock();

        let record = EventRecord::new(
            EventMeta {
                sequence: state.records.len() as u64 + 1,
                emitting_package,
                occurred_at: self.shared.clock.now(),
            },
            payload,
        );
        state.records.push(record.clone());

        state.subscribers.retain(|id, subscriber| {
            let Some(buffer) = subscriber.upgrade() else {
                tracing::debug!(cursor = %id, "pruned released cursor");
                return false;
            };
            if let Some(dropped) = buffer.push(record.clone()) {
                if dropped == 1 {
                    tracing::warn!(cursor = %id, "cursor buffer full, dropping oldest events");
                } else {
                    tracing::trace!(cursor = %id, dropped, "cursor buffer overflow");
                }
            }
            true
        });

        tracing::trace!(
            kind = record.kind(),
            seq = record.sequence(),
            package = %record.emitting_package(),
            "event logged"
        );
        record
    }

    /// Append an event emitted by this process's own package
    pub fn log<T: EventKind>(&self, payload: T) -> EventRecord {
        let package = self.shared.package.clone();
        self.append(package, payload)
    }

    /// Snapshot of every event logged so far, in append order
    pub fn all_events(&self) -> Vec<EventRecord> {
        self.lock().records.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Number of cursors still alive
    pub fn subscriber_count(&self) -> usize {
        self.lock()
            .subscribers
            .values()
            .filter(|s| s.strong_count() > 0)
            .count()
    }

    /// Hide everything logged so far from default cursor reads.
    ///
    /// History is kept; `get`, `next` and `poll` skip events whose sequence
    /// is at or below the returned watermark. The `*_since` reads are
    /// unaffected. The watermark is a sequence, not a time, so clock steps
    /// never change what a reset hides.
    pub fn reset(&self) -> u64 {
        let mut state = self.lock();
        state.reset_seq = state.records.len() as u64;
        tracing::debug!(reset_seq = state.reset_seq, at = %self.shared.clock.now(), "event log reset");
        state.reset_seq
    }

    /// Watermark set by the last [`reset`](Self::reset); 0 if never reset
    pub fn reset_marker(&self) -> u64 {
        self.lock().reset_seq
    }

    /// Register a new cursor seeded with the current history
    pub(crate) fn subscribe(&self) -> (CursorId, Arc<CursorBuffer>) {
        let mut state = self.lock();
        state.next_cursor += 1;
        let id = CursorId(state.next_cursor);
        let buffer = Arc::new(CursorBuffer::seeded(
            state.records.clone(),
            self.shared.config.cursor_capacity,
        ));
        state.subscribers.insert(id, Arc::downgrade(&buffer));
        (id, buffer)
    }

    pub(crate) fn unsubscribe(&self, id: CursorId) {
        self.lock().subscribers.remove(&id);
    }
}

impl fmt::Debug for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLog")
            .field("package", &self.shared.package)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
