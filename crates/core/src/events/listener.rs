// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener handles and registry entries

use crate::event::Event;
use crate::options::ListenerOptions;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Closure type for event listeners
pub type ListenerFn<D> = dyn Fn(&mut Event<D>) + Send + Sync;

/// A cloneable handle to a listener callback
///
/// Handles compare by identity: clones of one handle are equal, two handles
/// built from identical closures are not. Removal uses this identity.
pub struct Listener<D = serde_json::Value> {
    callback: Arc<ListenerFn<D>>,
}

impl<D> Listener<D> {
    pub fn new(callback: impl Fn(&mut Event<D>) + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Whether both handles refer to the same callback
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }

    pub(crate) fn call(&self, event: &mut Event<D>) {
        (self.callback)(event)
    }
}

impl<D> Clone for Listener<D> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<D> PartialEq for Listener<D> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<D> Eq for Listener<D> {}

impl<D> fmt::Debug for Listener<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Arc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

/// One entry in the registry
pub(crate) struct Registration<D> {
    /// Monotonic, unique per target; used to remove exactly this entry
    pub(crate) id: u64,
    pub(crate) listener: Listener<D>,
    pub(crate) options: ListenerOptions,
    /// Set when a one-shot registration has been claimed for invocation
    spent: Arc<AtomicBool>,
}

impl<D> Registration<D> {
    pub(crate) fn new(id: u64, listener: Listener<D>, options: ListenerOptions) -> Self {
        Self {
            id,
            listener,
            options,
            spent: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Removal identity: same callback and same capture flag
    pub(crate) fn matches(&self, listener: &Listener<D>, capture: bool) -> bool {
        self.listener.ptr_eq(listener) && self.options.capture == capture
    }

    /// Claim the single invocation of a one-shot registration.
    ///
    /// Returns false if it was already claimed, e.g. by a re-entrant
    /// dispatch that ran from inside an earlier listener.
    pub(crate) fn claim(&self) -> bool {
        !self.spent.swap(true, Ordering::SeqCst)
    }
}

impl<D> Clone for Registration<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            listener: self.listener.clone(),
            options: self.options,
            spent: Arc::clone(&self.spent),
        }
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
