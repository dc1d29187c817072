// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! eventlib-core: in-process event log for test assertions
//!
//! This crate provides:
//! - `EventLog` - append-only store of typed events with fan-out to readers
//! - `Query` - typed, package-scoped filter over logged events
//! - `Cursor` - independent read position with snapshot, draining and
//!   blocking reads
//!
//! Producers append events; test code asks "did X happen (yet)?" through a
//! cursor without racing the producers.

pub mod clock;
pub mod config;
mod error;
pub mod event;
mod log;
pub mod query;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{EventLogConfig, DEFAULT_POLL_TIMEOUT};
pub use error::{ConfigError, PollError, QueryError};
pub use event::{Event, EventKind, EventMeta, EventRecord, PackageName};
pub use log::{CursorId, EventLog, EventLogBuilder};
pub use query::{Cursor, Query};
