// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The event value delivered to listeners

use crate::error::{validate_event_name, EmitterError};
use crate::options::EmitOptions;

/// One occurrence of a named event, with its payload and cancellation state
///
/// `D` is the payload type. It defaults to `serde_json::Value` for callers
/// that want untyped detail data.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<D = serde_json::Value> {
    event_type: String,
    detail: Option<D>,
    cancelable: bool,
    bubbles: bool,
    composed: bool,
    default_prevented: bool,
    stop_immediate: bool,
}

impl<D> Event<D> {
    pub fn new(
        event_type: impl Into<String>,
        detail: Option<D>,
        options: EmitOptions,
    ) -> Result<Self, EmitterError> {
        let event_type = event_type.into();
        validate_event_name(&event_type)?;

        Ok(Self {
            event_type,
            detail,
            cancelable: options.cancelable,
            bubbles: options.bubbles,
            composed: options.composed,
            default_prevented: false,
            stop_immediate: false,
        })
    }

    /// The event name this event was emitted under
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn detail(&self) -> Option<&D> {
        self.detail.as_ref()
    }

    pub fn into_detail(self) -> Option<D> {
        self.detail
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn composed(&self) -> bool {
        self.composed
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Veto the default action. No-op unless the event is cancelable.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Skip every listener after the current one for this dispatch
    pub fn stop_immediate_propagation(&mut self) {
        self.stop_immediate = true;
    }

    pub(crate) fn immediate_propagation_stopped(&self) -> bool {
        self.stop_immediate
    }

    /// Reset once a dispatch finishes so the event can be dispatched again
    pub(crate) fn clear_propagation_flags(&mut self) {
        self.stop_immediate = false;
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
