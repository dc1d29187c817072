// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Activity lifecycle events
//!
//! One subtype per lifecycle callback, so a query for `ActivityStarted`
//! never matches a create or destroy.

use eventlib_core::{EventKind, Query};

/// Events raised by an activity's lifecycle callbacks
pub trait ActivityEvent: EventKind {
    /// Class name of the activity
    fn activity(&self) -> &str;
}

/// An activity was created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCreated {
    pub activity: String,
    /// Whether the activity was restored from saved state
    pub saved_instance_state: bool,
}

impl ActivityCreated {
    pub fn new(activity: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            saved_instance_state: false,
        }
    }

    pub fn with_saved_instance_state(mut self, restored: bool) -> Self {
        self.saved_instance_state = restored;
        self
    }
}

impl EventKind for ActivityCreated {
    const NAME: &'static str = "activity:created";
}

impl ActivityEvent for ActivityCreated {
    fn activity(&self) -> &str {
        &self.activity
    }
}

macro_rules! lifecycle_event {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub activity: String,
        }

        impl $name {
            pub fn new(activity: impl Into<String>) -> Self {
                Self {
                    activity: activity.into(),
                }
            }
        }

        impl EventKind for $name {
            const NAME: &'static str = $kind;
        }

        impl ActivityEvent for $name {
            fn activity(&self) -> &str {
                &self.activity
            }
        }
    };
}

lifecycle_event!(
    /// An activity became visible
    ActivityStarted,
    "activity:started"
);
lifecycle_event!(
    /// An activity moved to the foreground
    ActivityResumed,
    "activity:resumed"
);
lifecycle_event!(
    /// An activity lost the foreground
    ActivityPaused,
    "activity:paused"
);
lifecycle_event!(
    /// An activity is no longer visible
    ActivityStopped,
    "activity:stopped"
);
lifecycle_event!(
    /// An activity was destroyed
    ActivityDestroyed,
    "activity:destroyed"
);

/// Refinements for activity event queries
pub trait ActivityQueryExt {
    /// Match events raised by the activity with this class name
    fn where_activity(self, activity: impl Into<String>) -> Self;
}

impl<T: ActivityEvent> ActivityQueryExt for Query<T> {
    fn where_activity(self, activity: impl Into<String>) -> Self {
        let activity = activity.into();
        self.filter(move |e| e.activity() == activity)
    }
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
