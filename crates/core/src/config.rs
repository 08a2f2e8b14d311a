// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emitter configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! failure_policy = "isolate"
//! leak_warning_threshold = 25
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default number of registrations per event name before a leak warning
pub const DEFAULT_LEAK_WARNING_THRESHOLD: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How a panicking listener affects the rest of a dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the panic, then resume unwinding out of the dispatch.
    /// Remaining listeners for that dispatch are not invoked.
    #[default]
    Propagate,
    /// Log and record the panic, then continue with the next listener
    Isolate,
}

/// Configuration shared by an emitter and its clones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitterConfig {
    pub failure_policy: FailurePolicy,
    /// Warn when one event name gathers more registrations than this.
    /// `None` disables the warning; zero is unrepresentable.
    pub leak_warning_threshold: Option<NonZeroUsize>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            leak_warning_threshold: Some(DEFAULT_LEAK_WARNING_THRESHOLD),
        }
    }
}

impl EmitterConfig {
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_leak_warning_threshold(mut self, threshold: Option<NonZeroUsize>) -> Self {
        self.leak_warning_threshold = threshold;
        self
    }

    /// Parse configuration from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
