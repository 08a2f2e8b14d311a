// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for registration and emission

use thiserror::Error;

/// Errors raised at the `on`/`off`/`emit` call sites
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitterError {
    #[error("event name must not be empty")]
    EmptyEventName,
}

/// Event names are opaque, but must be non-empty
pub(crate) fn validate_event_name(name: &str) -> Result<(), EmitterError> {
    if name.is_empty() {
        return Err(EmitterError::EmptyEventName);
    }
    Ok(())
}
