// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registration and emission options
//!
//! Both option records only accept their documented fields; unknown keys
//! are rejected when deserializing.

use serde::{Deserialize, Serialize};

/// Options recognized when registering a listener
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListenerOptions {
    /// Remove the registration right after its first invocation
    pub once: bool,
    /// Part of the registration's identity for removal; no dispatch effect
    pub capture: bool,
    /// Advisory only: a passive listener that prevents default is logged
    pub passive: bool,
}

impl ListenerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_passive(mut self, passive: bool) -> Self {
        self.passive = passive;
        self
    }

    /// Shorthand for a one-shot registration
    pub fn one_shot() -> Self {
        Self::new().with_once(true)
    }
}

/// Options used to construct the event for one emission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitOptions {
    /// Whether listeners may veto the default action
    pub cancelable: bool,
    /// Recorded on the event; there is no tree to bubble through
    pub bubbles: bool,
    /// Recorded on the event; there is no tree to compose across
    pub composed: bool,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn with_composed(mut self, composed: bool) -> Self {
        self.composed = composed;
        self
    }

    /// Shorthand for a cancelable emission
    pub fn cancelable() -> Self {
        Self::new().with_cancelable(true)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
