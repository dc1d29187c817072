// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Free-form events identified by a tag and optional data

use eventlib_core::{EventKind, EventLog, EventRecord, PackageName, Query, QueryError};

/// An event apps log for anything without a dedicated subtype
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomEvent {
    pub tag: Option<String>,
    pub data: Option<String>,
}

impl EventKind for CustomEvent {
    const NAME: &'static str = "custom";
}

impl CustomEvent {
    /// Start building a custom event to log as the log's own package
    pub fn logger(log: &EventLog) -> CustomEventLogger<'_> {
        CustomEventLogger {
            log,
            event: CustomEvent::default(),
        }
    }

    /// Query custom events emitted by `package`
    pub fn query(
        log: &EventLog,
        package: impl Into<PackageName>,
    ) -> Result<Query<CustomEvent>, QueryError> {
        Query::new(log, package)
    }
}

/// Builder that logs a [`CustomEvent`]
pub struct CustomEventLogger<'a> {
    log: &'a EventLog,
    event: CustomEvent,
}

impl CustomEventLogger<'_> {
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.event.tag = Some(tag.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.event.data = Some(data.into());
        self
    }

    pub fn log(self) -> EventRecord {
        tracing::debug!(tag = ?self.event.tag, data = ?self.event.data, "logging custom event");
        self.log.log(self.event)
    }
}

/// Refinements for custom event queries
pub trait CustomEventQueryExt {
    /// Match events whose tag equals `tag`
    fn with_tag(self, tag: impl Into<String>) -> Self;
    /// Match events whose data equals `data`
    fn with_data(self, data: impl Into<String>) -> Self;
}

impl CustomEventQueryExt for Query<CustomEvent> {
    fn with_tag(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.filter(move |e| e.tag.as_deref() == Some(tag.as_str()))
    }

    fn with_data(self, data: impl Into<String>) -> Self {
        let data = data.into();
        self.filter(move |e| e.data.as_deref() == Some(data.as_str()))
    }
}

#[cfg(test)]
#[path = "custom_tests.rs"]
mod tests;
