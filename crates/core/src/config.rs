// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event log configuration
//!
//! Example TOML:
//!
//! ```toml
//! default_poll_timeout = "30s"
//! cursor_capacity = 10000
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// How long `wait()` blocks when no timeout is given
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Configuration for an [`EventLog`](crate::EventLog)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventLogConfig {
    /// Timeout used by `Cursor::wait` and `Cursor::wait_or_fail`
    #[serde(with = "humantime_serde")]
    pub default_poll_timeout: Duration,
    /// Maximum events buffered per cursor. `None` buffers without bound;
    /// when full, the oldest buffered event is dropped.
    pub cursor_capacity: Option<usize>,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            default_poll_timeout: DEFAULT_POLL_TIMEOUT,
            cursor_capacity: None,
        }
    }
}

impl EventLogConfig {
    pub fn with_default_poll_timeout(mut self, timeout: Duration) -> Self {
        self.default_poll_timeout = timeout;
        self
    }

    pub fn with_cursor_capacity(mut self, capacity: usize) -> Self {
        self.cursor_capacity = Some(capacity);
        self
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cursor_capacity == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
