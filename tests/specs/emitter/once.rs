//! One-shot listener specs

use crate::prelude::*;

#[test]
fn once_listener_runs_exactly_once() {
    let emitter = emitter();
    let rec = Recorder::new();
    emitter
        .on("event.test", rec.listener("hit"), ListenerOptions::one_shot())
        .unwrap();

    fire(&emitter, "event.test");
    fire(&emitter, "event.test");

    assert_eq!(rec.count("hit"), 1);
    assert_eq!(emitter.listener_count("event.test"), 0);
}

#[test]
fn once_listener_is_expired_even_when_it_prevents_default() {
    let emitter = emitter();
    let rec = Recorder::new();
    {
        let rec = rec.clone();
        emitter
            .once("save", move |event| {
                rec.push("veto");
                event.prevent_default();
            })
            .unwrap();
    }

    assert!(!fire_cancelable(&emitter, "save"));
    assert!(fire_cancelable(&emitter, "save"));
    assert_eq!(rec.entries(), vec!["veto"]);
}

#[test]
fn persistent_and_once_listeners_mix() {
    let emitter = emitter();
    let rec = Recorder::new();
    emitter
        .on("tick", rec.listener("always"), ListenerOptions::default())
        .unwrap();
    emitter.once("tick", rec.listener("once")).unwrap();

    fire(&emitter, "tick");
    fire(&emitter, "tick");

    assert_eq!(rec.entries(), vec!["always", "once", "always"]);
}

#[test]
fn once_listener_emitting_its_own_event_does_not_rerun() {
    let emitter = emitter();
    let rec = Recorder::new();
    {
        let rec = rec.clone();
        let inner = emitter.clone();
        emitter
            .once("ping", move |_| {
                rec.push("ping");
                inner.emit("ping", None, EmitOptions::default()).unwrap();
            })
            .unwrap();
    }

    fire(&emitter, "ping");

    assert_eq!(rec.entries(), vec!["ping"]);
}
