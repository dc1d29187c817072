// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-cursor FIFO buffer fed by the event log

use crate::event::EventRecord;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::Instant;
use tokio::sync::futures::Notified;
use tokio::sync::Notify;

/// Events pushed to one cursor and not yet consumed.
///
/// Producers push while holding the log lock; the owning cursor pops
/// without it. Blocking waiters park on `ready`, async waiters on `notify`.
pub(crate) struct CursorBuffer {
    state: Mutex<BufferState>,
    ready: Condvar,
    notify: Notify,
    capacity: Option<usize>,
}

#[derive(Default)]
struct BufferState {
    queue: VecDeque<EventRecord>,
    dropped: u64,
}

impl CursorBuffer {
    /// Create a buffer holding `seed`, keeping the newest events if it
    /// exceeds `capacity`
    pub(crate) fn seeded(seed: Vec<EventRecord>, capacity: Option<usize>) -> Self {
        let capacity = capacity.map(|c| c.max(1));
        let mut queue = VecDeque::from(seed);
        let mut dropped = 0;
        if let Some(capacity) = capacity {
            while queue.len() > capacity {
                queue.pop_front();
                dropped += 1;
            }
        }

        Self {
            state: Mutex::new(BufferState { queue, dropped }),
            ready: Condvar::new(),
            notify: Notify::new(),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, BufferState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a record and wake waiters.
    ///
    /// Returns the total dropped count if the push evicted the oldest event.
    pub(crate) fn push(&self, record: EventRecord) -> Option<u64> {
        let mut state = self.lock();
        let mut evicted = None;
        if let Some(capacity) = self.capacity {
            if state.queue.len() >= capacity {
                state.queue.pop_front();
                state.dropped += 1;
                evicted = Some(state.dropped);
            }
        }
        state.queue.push_back(record);
        drop(state);

        self.ready.notify_all();
        self.notify.notify_waiters();
        evicted
    }

    /// Remove the oldest buffered record
    pub(crate) fn pop(&self) -> Option<EventRecord> {
        self.lock().queue.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub(crate) fn dropped(&self) -> u64 {
        self.lock().dropped
    }

    /// Block until the buffer is non-empty or `deadline` passes.
    ///
    /// The remaining time is recomputed after every wakeup, so spurious
    /// wakeups never extend the total wait. `None` waits without bound.
    /// Returns whether the buffer holds at least one record.
    pub(crate) fn wait_nonempty(&self, deadline: Option<Instant>) -> bool {
        let mut state = self.lock();
        loop {
            if !state.queue.is_empty() {
                return true;
            }
            match deadline {
                None => {
                    state = self.ready.wait(state).unwrap_or_else(|e| e.into_inner());
                }
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    if remaining.is_zero() {
                        return false;
                    }
                    let (guard, _) = self
                        .ready
                        .wait_timeout(state, remaining)
                        .unwrap_or_else(|e| e.into_inner());
                    state = guard;
                }
            }
        }
    }

    /// Future resolved by the next push.
    ///
    /// Callers must `enable()` it before checking the buffer to avoid
    /// missing a push that lands in between.
    pub(crate) fn notified(&self) -> Notified<'_> {
        self.notify.notified()
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
