// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Broadcast receiver events

use eventlib_core::{EventKind, Query};
use std::collections::BTreeMap;

/// A broadcast receiver handled an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastReceived {
    /// Class name of the receiver
    pub receiver: String,
    /// Intent action
    pub action: String,
    /// String extras carried by the intent
    pub extras: BTreeMap<String, String>,
}

impl BroadcastReceived {
    pub fn new(receiver: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            action: action.into(),
            extras: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

impl EventKind for BroadcastReceived {
    const NAME: &'static str = "broadcast:received";
}

/// Refinements for broadcast queries
pub trait BroadcastQueryExt {
    fn where_action(self, action: impl Into<String>) -> Self;
    fn where_receiver(self, receiver: impl Into<String>) -> Self;
    /// Match broadcasts carrying extra `key` with exactly `value`
    fn where_extra(self, key: impl Into<String>, value: impl Into<String>) -> Self;
}

impl BroadcastQueryExt for Query<BroadcastReceived> {
    fn where_action(self, action: impl Into<String>) -> Self {
        let action = action.into();
        self.filter(move |e| e.action == action)
    }

    fn where_receiver(self, receiver: impl Into<String>) -> Self {
        let receiver = receiver.into();
        self.filter(move |e| e.receiver == receiver)
    }

    fn where_extra(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.filter(move |e| e.extras.get(&key) == Some(&value))
    }
}

#[cfg(test)]
#[path = "broadcast_tests.rs"]
mod tests;
