// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dispatch primitive: a registry of listeners keyed by event name
//!
//! Dispatch semantics:
//! - Listeners run synchronously, in registration order, on the caller's stack.
//! - The listener list is snapshotted before iteration. A listener removed
//!   during a dispatch is still called in that round; a listener added during
//!   a dispatch is not called until the next one.
//! - One-shot registrations leave the registry before they run, so they are
//!   gone even if the callback panics.
//! - The registry lock is never held while a callback runs, so callbacks may
//!   add, remove or dispatch re-entrantly.

use super::listener::{Listener, Registration};
use super::report::{panic_message, DispatchReport, ListenerFailure};
use crate::config::{EmitterConfig, FailurePolicy};
use crate::error::{validate_event_name, EmitterError};
use crate::event::Event;
use crate::options::ListenerOptions;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Registry<D> {
    listeners: BTreeMap<String, Vec<Registration<D>>>,
    next_id: u64,
}

/// Registry plus synchronous dispatcher. Clones share the same registry.
pub struct EventTarget<D = serde_json::Value> {
    registry: Arc<RwLock<Registry<D>>>,
    config: Arc<EmitterConfig>,
}

impl<D> EventTarget<D> {
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry {
                listeners: BTreeMap::new(),
                next_id: 1,
            })),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Register `listener` for `event_type`.
    ///
    /// Registering the same handle twice keeps both entries; both run.
    pub fn add_event_listener(
        &self,
        event_type: &str,
        listener: &Listener<D>,
        options: ListenerOptions,
    ) -> Result<(), EmitterError> {
        validate_event_name(event_type)?;

        let count = {
            let mut guard = self.write();
            let registry = &mut *guard;
            let id = registry.next_id;
            registry.next_id += 1;

            let entries = registry
                .listeners
                .entry(event_type.to_string())
                .or_default();
            entries.push(Registration::new(id, listener.clone(), options));
            entries.len()
        };

        tracing::trace!(
            event = event_type,
            once = options.once,
            count,
            "listener added"
        );

        if let Some(threshold) = self.config.leak_warning_threshold {
            let threshold = threshold.get();
            if count == threshold.saturating_add(1) {
                tracing::warn!(
                    event = event_type,
                    count,
                    threshold,
                    "possible listener leak: too many registrations for one event"
                );
            }
        }

        Ok(())
    }

    /// Remove the earliest registration of `listener` for `event_type` whose
    /// capture flag matches. Does nothing if there is none.
    pub fn remove_event_listener(
        &self,
        event_type: &str,
        listener: &Listener<D>,
        options: ListenerOptions,
    ) -> Result<(), EmitterError> {
        validate_event_name(event_type)?;

        let mut guard = self.write();
        let now_empty = match guard.listeners.get_mut(event_type) {
            Some(entries) => {
                if let Some(pos) = entries
                    .iter()
                    .position(|r| r.matches(listener, options.capture))
                {
                    entries.remove(pos);
                    tracing::trace!(event = event_type, "listener removed");
                }
                entries.is_empty()
            }
            None => return Ok(()),
        };
        if now_empty {
            guard.listeners.remove(event_type);
        }

        Ok(())
    }

    /// Dispatch `event` to its listeners. Returns false iff the event is
    /// cancelable and a listener prevented default.
    ///
    /// Under `FailurePolicy::Propagate` a panicking listener unwinds out of
    /// this call and the remaining listeners are skipped.
    pub fn dispatch_event(&self, event: &mut Event<D>) -> bool {
        self.dispatch_event_with_report(event).not_canceled
    }

    /// Like [`EventTarget::dispatch_event`], but also reports how many
    /// listeners ran and which of them panicked.
    pub fn dispatch_event_with_report(&self, event: &mut Event<D>) -> DispatchReport {
        let span = tracing::debug_span!("dispatch", event = event.event_type());
        let _guard = span.enter();

        let snapshot: Vec<Registration<D>> = self
            .read()
            .listeners
            .get(event.event_type())
            .map(|entries| entries.to_vec())
            .unwrap_or_default();

        let mut report = DispatchReport::new();

        for (position, registration) in snapshot.iter().enumerate() {
            if event.immediate_propagation_stopped() {
                break;
            }

            if registration.options.once {
                if !registration.claim() {
                    continue;
                }
                self.remove_registration(event.event_type(), registration.id);
            }

            tracing::trace!(position, once = registration.options.once, "invoking listener");

            let was_prevented = event.default_prevented();
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| registration.listener.call(event)));
            report.invoked += 1;

            if let Err(payload) = outcome {
                let message = panic_message(payload.as_ref());
                tracing::error!(position, error = %message, "listener panicked");
                match self.config.failure_policy {
                    FailurePolicy::Propagate => {
                        event.clear_propagation_flags();
                        panic::resume_unwind(payload);
                    }
                    FailurePolicy::Isolate => {
                        report.failures.push(ListenerFailure { position, message });
                    }
                }
            }

            if registration.options.passive && !was_prevented && event.default_prevented() {
                tracing::warn!(position, "passive listener prevented default");
            }
        }

        let stopped = event.immediate_propagation_stopped();
        event.clear_propagation_flags();
        report.not_canceled = !event.default_prevented();

        tracing::debug!(
            invoked = report.invoked,
            failures = report.failures.len(),
            default_prevented = event.default_prevented(),
            stopped,
            "dispatched"
        );

        report
    }

    /// Number of registrations for `event_type`
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.read()
            .listeners
            .get(event_type)
            .map_or(0, |entries| entries.len())
    }

    pub fn has_listeners(&self, event_type: &str) -> bool {
        self.listener_count(event_type) > 0
    }

    /// Event names with at least one registration, sorted
    pub fn event_names(&self) -> Vec<String> {
        self.read().listeners.keys().cloned().collect()
    }

    fn remove_registration(&self, event_type: &str, id: u64) {
        let mut guard = self.write();
        let now_empty = match guard.listeners.get_mut(event_type) {
            Some(entries) => {
                entries.retain(|r| r.id != id);
                entries.is_empty()
            }
            None => return,
        };
        if now_empty {
            guard.listeners.remove(event_type);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry<D>> {
        self.registry.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<D>> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<D> Default for EventTarget<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for EventTarget<D> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            config: Arc::clone(&self.config),
        }
    }
}

impl<D> fmt::Debug for EventTarget<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventTarget")
            .field("event_names", &self.event_names())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
