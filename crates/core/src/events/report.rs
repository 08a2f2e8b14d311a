// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch outcomes

use std::any::Any;

/// A listener panic caught under `FailurePolicy::Isolate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Index of the listener in the dispatch snapshot
    pub position: usize,
    pub message: String,
}

/// What happened during one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// False iff the event was cancelable and a listener prevented default
    pub not_canceled: bool,
    /// Listeners actually invoked, including ones that panicked
    pub invoked: usize,
    pub failures: Vec<ListenerFailure>,
}

impl DispatchReport {
    pub(crate) fn new() -> Self {
        Self {
            not_canceled: true,
            invoked: 0,
            failures: Vec::new(),
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Best-effort text for a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
