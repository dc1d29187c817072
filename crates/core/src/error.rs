// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for queries, polls and configuration

use crate::event::PackageName;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised when building a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("package name must not be empty")]
    EmptyPackage,
    #[error("cannot query events of package {requested}: this process is {owner}")]
    ForeignPackage {
        requested: PackageName,
        owner: PackageName,
    },
}

/// Errors from polls that require a match
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("no {kind} event from {package} within {}", human(.timeout))]
    Timeout {
        kind: &'static str,
        package: PackageName,
        timeout: Duration,
    },
}

fn human(duration: &Duration) -> humantime::FormattedDuration {
    humantime::format_duration(*duration)
}

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cursor_capacity must be at least 1")]
    ZeroCapacity,
}
