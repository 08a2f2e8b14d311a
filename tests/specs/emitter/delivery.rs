//! Delivery specs
//!
//! Verify payload delivery and that every emission is delivered in-line,
//! regardless of what the caller awaited in between.

use crate::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn every_emission_invokes_listener() {
    let emitter = emitter();
    let rec = Recorder::new();
    emitter
        .on("event.test", rec.listener("hit"), ListenerOptions::default())
        .unwrap();

    fire(&emitter, "event.test");
    tokio::task::yield_now().await;
    fire(&emitter, "event.test");
    tokio::time::sleep(Duration::from_millis(5)).await;
    fire(&emitter, "event.test");

    assert_eq!(rec.count("hit"), 3);
}

#[test]
fn emit_returns_after_all_listeners_ran() {
    let emitter = emitter();
    let rec = Recorder::new();
    emitter
        .on("event.test", rec.listener("a"), ListenerOptions::default())
        .unwrap();
    emitter
        .on("event.test", rec.listener("b"), ListenerOptions::default())
        .unwrap();

    fire(&emitter, "event.test");
    // No yield needed: dispatch is synchronous
    assert_eq!(rec.entries(), vec!["a", "b"]);
}

#[test]
fn detail_reaches_listener() {
    let emitter = emitter();
    let seen = Arc::new(Mutex::new(None));
    {
        let seen = Arc::clone(&seen);
        emitter
            .on(
                "event.test",
                move |event| {
                    let hello = event.detail().and_then(|d| d.get("hello")).cloned();
                    *seen.lock().unwrap() = hello;
                },
                ListenerOptions::default(),
            )
            .unwrap();
    }

    emitter
        .emit(
            "event.test",
            Some(json!({"hello": "world"})),
            EmitOptions::default(),
        )
        .unwrap();

    assert_eq!(*seen.lock().unwrap(), Some(json!("world")));
}

#[test]
fn event_type_matches_emitted_name() {
    let emitter = emitter();
    let seen = Arc::new(Mutex::new(String::new()));
    {
        let seen = Arc::clone(&seen);
        emitter
            .on(
                "change",
                move |event| *seen.lock().unwrap() = event.event_type().to_string(),
                ListenerOptions::default(),
            )
            .unwrap();
    }

    fire(&emitter, "change");

    assert_eq!(*seen.lock().unwrap(), "change");
}

#[test]
fn missing_detail_is_none() {
    let emitter = emitter();
    let had_detail = Arc::new(Mutex::new(None));
    {
        let had_detail = Arc::clone(&had_detail);
        emitter
            .on(
                "bare",
                move |event| *had_detail.lock().unwrap() = Some(event.detail().is_some()),
                ListenerOptions::default(),
            )
            .unwrap();
    }

    fire(&emitter, "bare");

    assert_eq!(*had_detail.lock().unwrap(), Some(false));
}
