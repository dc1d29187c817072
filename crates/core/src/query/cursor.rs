// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-query read position over the event log

use super::buffer::CursorBuffer;
use super::Query;
use crate::error::PollError;
use crate::event::{Event, EventKind, EventRecord};
use crate::log::CursorId;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Lower bound on the events a read may return
#[derive(Clone, Copy, Debug)]
enum ReadFrom {
    /// Appended after the given sequence
    After(u64),
    /// Occurred at or after the given time
    Since(DateTime<Utc>),
}

/// An independent reader for one query.
///
/// The cursor is subscribed to the log from creation until it is closed or
/// dropped. Its buffer starts as a copy of the log's history and grows as
/// events are appended.
///
/// - `get*` scans the full history and never consumes anything.
/// - `next*` drains the buffer up to the first match without blocking.
/// - `poll*` drains like `next*`, then waits for new events until the
///   timeout expires.
///
/// Reads without an explicit `earliest` skip events appended before the
/// log's last [`reset`](crate::EventLog::reset).
pub struct Cursor<T: EventKind> {
    id: CursorId,
    query: Query<T>,
    buffer: Arc<CursorBuffer>,
}

impl<T: EventKind> Cursor<T> {
    pub(crate) fn open(query: Query<T>) -> Self {
        let (id, buffer) = query.log().subscribe();
        tracing::debug!(cursor = %id, kind = T::NAME, package = %query.package(), buffered = buffer.len(), "cursor opened");
        Self { id, query, buffer }
    }

    pub fn id(&self) -> CursorId {
        self.id
    }

    pub fn query(&self) -> &Query<T> {
        &self.query
    }

    /// Number of events waiting in this cursor's buffer, matching or not
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Number of events evicted because the buffer was full
    pub fn dropped(&self) -> u64 {
        self.buffer.dropped()
    }

    /// First matching event in the log's history since the last reset
    pub fn get(&self) -> Option<Event<T>> {
        self.find_in_history(self.after_reset())
    }

    /// First matching event in the log's history that occurred at or after
    /// `earliest`
    pub fn get_since(&self, earliest: DateTime<Utc>) -> Option<Event<T>> {
        self.find_in_history(ReadFrom::Since(earliest))
    }

    /// Next unseen matching event since the last reset, without blocking
    pub fn next(&self) -> Option<Event<T>> {
        self.drain_until_match(self.after_reset())
    }

    /// Next unseen matching event at or after `earliest`, without blocking.
    ///
    /// Non-matching events ahead of the match are consumed.
    pub fn next_since(&self, earliest: DateTime<Utc>) -> Option<Event<T>> {
        self.drain_until_match(ReadFrom::Since(earliest))
    }

    /// Next unseen matching event since the last reset, waiting up to
    /// `timeout` for one to be logged
    pub fn poll(&self, timeout: Duration) -> Option<Event<T>> {
        self.block_until_match(self.after_reset(), timeout)
    }

    /// Next unseen matching event at or after `earliest`, waiting up to
    /// `timeout` in total for one to be logged
    pub fn poll_since(&self, earliest: DateTime<Utc>, timeout: Duration) -> Option<Event<T>> {
        self.block_until_match(ReadFrom::Since(earliest), timeout)
    }

    /// [`poll`](Self::poll) with the log's configured default timeout
    pub fn wait(&self) -> Option<Event<T>> {
        self.poll(self.query.log().config().default_poll_timeout)
    }

    /// Like [`poll`](Self::poll), but a timeout is an error
    pub fn poll_or_fail(&self, timeout: Duration) -> Result<Event<T>, PollError> {
        self.poll(timeout).ok_or_else(|| PollError::Timeout {
            kind: T::NAME,
            package: self.query.package().clone(),
            timeout,
        })
    }

    /// [`poll_or_fail`](Self::poll_or_fail) with the configured default timeout
    pub fn wait_or_fail(&self) -> Result<Event<T>, PollError> {
        self.poll_or_fail(self.query.log().config().default_poll_timeout)
    }

    /// Async form of [`poll`](Self::poll) for callers on a tokio runtime
    pub async fn poll_async(&self, timeout: Duration) -> Option<Event<T>> {
        self.await_match(self.after_reset(), timeout).await
    }

    /// Async form of [`poll_since`](Self::poll_since)
    pub async fn poll_since_async(
        &self,
        earliest: DateTime<Utc>,
        timeout: Duration,
    ) -> Option<Event<T>> {
        self.await_match(ReadFrom::Since(earliest), timeout).await
    }

    /// Iterate over the matching events currently buffered, consuming them
    pub fn drain(&self) -> impl Iterator<Item = Event<T>> + '_ {
        std::iter::from_fn(move || self.next())
    }

    /// Unsubscribe from the log
    pub fn close(self) {
        drop(self);
    }

    fn after_reset(&self) -> ReadFrom {
        ReadFrom::After(self.query.log().reset_marker())
    }

    fn accept(&self, record: &EventRecord, from: ReadFrom) -> Option<Event<T>> {
        let visible = match from {
            ReadFrom::After(sequence) => record.sequence() > sequence,
            ReadFrom::Since(earliest) => record.occurred_at() >= earliest,
        };
        if !visible {
            return None;
        }
        self.query.matches(record)
    }

    fn find_in_history(&self, from: ReadFrom) -> Option<Event<T>> {
        self.query
            .log()
            .all_events()
            .iter()
            .find_map(|record| self.accept(record, from))
    }

    fn drain_until_match(&self, from: ReadFrom) -> Option<Event<T>> {
        // Predicates run outside the buffer lock; they may log events.
        while let Some(record) = self.buffer.pop() {
            if let Some(event) = self.accept(&record, from) {
                return Some(event);
            }
        }
        None
    }

    fn block_until_match(
        &self,
        from: ReadFrom,
        timeout: Duration,
    ) -> Option<Event<T>> {
        let deadline = Instant::now().checked_add(timeout);
        loop {
            if let Some(event) = self.drain_until_match(from) {
                return Some(event);
            }
            if !self.buffer.wait_nonempty(deadline) {
                tracing::debug!(cursor = %self.id, kind = T::NAME, ?timeout, "poll timed out");
                return None;
            }
        }
    }

    async fn await_match(
        &self,
        from: ReadFrom,
        timeout: Duration,
    ) -> Option<Event<T>> {
        let deadline = tokio::time::Instant::now().checked_add(timeout);
        loop {
            let notified = self.buffer.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(event) = self.drain_until_match(from) {
                return Some(event);
            }
            match deadline {
                Some(deadline) => {
                    if tokio::time::timeout_at(deadline, notified).await.is_err() {
                        tracing::debug!(cursor = %self.id, kind = T::NAME, ?timeout, "async poll timed out");
                        return self.drain_until_match(from);
                    }
                }
                None => notified.await,
            }
        }
    }
}

impl<T: EventKind> Drop for Cursor<T> {
    fn drop(&mut self) {
        self.query.log().unsubscribe(self.id);
        tracing::debug!(cursor = %self.id, kind = T::NAME, "cursor closed");
    }
}

impl<T: EventKind> std::fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("id", &self.id)
            .field("query", &self.query)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
