// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `on`/`off`/`emit` over an [`EventTarget`]

use crate::config::EmitterConfig;
use crate::error::EmitterError;
use crate::event::Event;
use crate::events::{DispatchReport, EventTarget, Listener};
use crate::options::{EmitOptions, ListenerOptions};
use std::fmt;

/// Named-event emitter
///
/// Owns an [`EventTarget`] and adapts its native operations. Clones share
/// the same registry.
pub struct Emitter<D = serde_json::Value> {
    target: EventTarget<D>,
}

impl<D> Emitter<D> {
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            target: EventTarget::with_config(config),
        }
    }

    /// The underlying dispatch primitive, for direct dispatch of
    /// caller-built events or re-registration of an existing handle
    pub fn target(&self) -> &EventTarget<D> {
        &self.target
    }

    /// Register `callback` for `event_name`.
    ///
    /// Returns the handle to pass to [`Emitter::off`].
    pub fn on(
        &self,
        event_name: &str,
        callback: impl Fn(&mut Event<D>) + Send + Sync + 'static,
        options: ListenerOptions,
    ) -> Result<Listener<D>, EmitterError> {
        let listener = Listener::new(callback);
        self.target
            .add_event_listener(event_name, &listener, options)?;
        Ok(listener)
    }

    /// Register `callback` to run on the next emission of `event_name` only
    pub fn once(
        &self,
        event_name: &str,
        callback: impl Fn(&mut Event<D>) + Send + Sync + 'static,
    ) -> Result<Listener<D>, EmitterError> {
        self.on(event_name, callback, ListenerOptions::one_shot())
    }

    /// Remove a registration made by [`Emitter::on`]. `options.capture` must
    /// match the registration. Does nothing if no registration matches.
    pub fn off(
        &self,
        event_name: &str,
        listener: &Listener<D>,
        options: ListenerOptions,
    ) -> Result<(), EmitterError> {
        self.target
            .remove_event_listener(event_name, listener, options)
    }

    /// Emit `event_name` with `detail`.
    ///
    /// Returns `Ok(false)` iff `options.cancelable` is set and a listener
    /// prevented default, i.e. whether the default action should proceed.
    /// Under the default failure policy a panicking listener unwinds out of
    /// this call and later listeners are skipped.
    pub fn emit(
        &self,
        event_name: &str,
        detail: Option<D>,
        options: EmitOptions,
    ) -> Result<bool, EmitterError> {
        Ok(self.emit_with_report(event_name, detail, options)?.not_canceled)
    }

    pub fn emit_with_report(
        &self,
        event_name: &str,
        detail: Option<D>,
        options: EmitOptions,
    ) -> Result<DispatchReport, EmitterError> {
        let mut event = Event::new(event_name, detail, options)?;
        Ok(self.target.dispatch_event_with_report(&mut event))
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.target.listener_count(event_name)
    }

    pub fn has_listeners(&self, event_name: &str) -> bool {
        self.target.has_listeners(event_name)
    }

    pub fn event_names(&self) -> Vec<String> {
        self.target.event_names()
    }
}

impl<D> Default for Emitter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for Emitter<D> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
        }
    }
}

impl<D> fmt::Debug for Emitter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("target", &self.target)
            .finish()
    }
}

impl<D> From<EventTarget<D>> for Emitter<D> {
    fn from(target: EventTarget<D>) -> Self {
        Self { target }
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
