// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Event subtypes logged by test apps
//!
//! Each subtype implements `EventKind` and comes with query refinements
//! (extension traits on `Query<T>`).

pub mod activity;
pub mod broadcast;
pub mod custom;

pub use activity::{
    ActivityCreated, ActivityDestroyed, ActivityEvent, ActivityPaused, ActivityQueryExt,
    ActivityResumed, ActivityStarted, ActivityStopped,
};
pub use broadcast::{BroadcastQueryExt, BroadcastReceived};
pub use custom::{CustomEvent, CustomEventLogger, CustomEventQueryExt};
