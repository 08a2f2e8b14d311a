// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch primitive
//!
//! This module provides:
//! - `EventTarget` - Registry of listeners with synchronous, ordered dispatch
//! - `Listener` - Identity-compared handle to a listener callback
//! - `DispatchReport` - Outcome of one dispatch, including isolated failures

mod listener;
mod report;
mod target;

pub use listener::{Listener, ListenerFn};
pub use report::{DispatchReport, ListenerFailure};
pub use target::EventTarget;
