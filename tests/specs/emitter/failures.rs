//! Listener failure specs
//!
//! By default a panicking listener aborts the emission; isolation is opt-in.

use crate::prelude::*;
use std::panic::{self, AssertUnwindSafe};

#[test]
fn panic_propagates_and_skips_remaining_listeners() {
    let emitter = emitter();
    let rec = Recorder::new();
    emitter
        .on("job", rec.listener("before"), ListenerOptions::default())
        .unwrap();
    emitter
        .on("job", |_| panic!("listener exploded"), ListenerOptions::default())
        .unwrap();
    emitter
        .on("job", rec.listener("after"), ListenerOptions::default())
        .unwrap();

    let result = panic::catch_unwind(AssertUnwindSafe(|| fire(&emitter, "job")));

    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"listener exploded"));
    assert_eq!(rec.entries(), vec!["before"]);
}

#[test]
fn emitter_stays_usable_after_a_propagated_panic() {
    let emitter = emitter();
    let rec = Recorder::new();
    emitter
        .once("job", |_| panic!("first run fails"))
        .unwrap();
    emitter
        .on("job", rec.listener("steady"), ListenerOptions::default())
        .unwrap();

    assert!(panic::catch_unwind(AssertUnwindSafe(|| fire(&emitter, "job"))).is_err());
    assert!(fire(&emitter, "job"));

    assert_eq!(rec.entries(), vec!["steady"]);
}

#[test]
fn isolation_keeps_dispatching_and_reports() {
    let emitter = emitter_with(EmitterConfig::default().with_failure_policy(FailurePolicy::Isolate));
    let rec = Recorder::new();
    emitter
        .on("job", rec.listener("before"), ListenerOptions::default())
        .unwrap();
    emitter
        .on(
            "job",
            |_| panic!("{} exploded", "listener"),
            ListenerOptions::default(),
        )
        .unwrap();
    emitter
        .on("job", rec.listener("after"), ListenerOptions::default())
        .unwrap();

    let report = emitter
        .emit_with_report("job", None, EmitOptions::default())
        .unwrap();

    assert_eq!(rec.entries(), vec!["before", "after"]);
    assert!(report.not_canceled);
    assert_eq!(report.invoked, 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].position, 1);
    assert_eq!(report.failures[0].message, "listener exploded");
}

#[test]
fn isolated_emit_still_returns_cancellation() {
    let emitter = emitter_with(EmitterConfig::default().with_failure_policy(FailurePolicy::Isolate));
    emitter
        .on("save", |event| event.prevent_default(), ListenerOptions::default())
        .unwrap();
    emitter
        .on("save", |_| panic!("late failure"), ListenerOptions::default())
        .unwrap();

    assert!(!fire_cancelable(&emitter, "save"));
}
