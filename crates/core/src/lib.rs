//! tidings-core: in-process, synchronous named-event emitter
//!
//! This crate provides:
//! - `Emitter` - `on`/`off`/`emit` over a dispatch primitive
//! - `EventTarget` - Listener registry with ordered, synchronous dispatch
//! - `Event` - Payload plus cancellation state delivered to listeners
//! - `EmitterConfig` - Failure policy and leak warnings, loadable from TOML
//!
//! ```
//! use tidings_core::{EmitOptions, Emitter, EmitterError, ListenerOptions};
//!
//! fn main() -> Result<(), EmitterError> {
//!     let emitter: Emitter = Emitter::new();
//!     let veto = emitter.on("save", |event| event.prevent_default(), ListenerOptions::default())?;
//!
//!     let proceed = emitter.emit("save", None, EmitOptions::cancelable())?;
//!     assert!(!proceed);
//!
//!     emitter.off("save", &veto, ListenerOptions::default())?;
//!     assert!(emitter.emit("save", None, EmitOptions::cancelable())?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod events;
pub mod options;

mod emitter;

// Re-exports
pub use config::{ConfigError, EmitterConfig, FailurePolicy};
pub use emitter::Emitter;
pub use error::EmitterError;
pub use event::Event;
pub use events::{DispatchReport, EventTarget, Listener, ListenerFailure, ListenerFn};
pub use options::{EmitOptions, ListenerOptions};
