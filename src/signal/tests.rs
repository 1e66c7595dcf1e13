#![cfg(test)]

use std::thread;

use derive_more::{Display, Error};

use super::*;
use crate::util::panic::assert_signals;

#[derive(Debug, Display, Error)]
#[display("disk on fire")]
struct DiskOnFire;

impl Raise for DiskOnFire {}

#[test]
fn test_intercept_passes_values_through() {
    assert_eq!(intercept(|| 42).ok(), Some(42));
    assert_eq!(
        handlers_active(),
        0,
        "The handler count should be back to zero after a normal return."
    );
}

#[test]
fn test_intercept_signal() {
    let result = intercept(|| -> u8 { raise("bad input") });

    match result {
        Err(Intercepted::Signal(signal)) => assert_eq!(signal.message(), "bad input"),
        other => panic!("expected an intercepted signal, got {other:?}"),
    }
}

#[test]
fn test_intercept_plain_panic() {
    let result = intercept(|| -> u8 { panic!("not a signal") });

    let intercepted = result.expect_err("A plain panic should be intercepted too.");
    assert!(intercepted.is_panic());
    assert_eq!(intercepted.message(), "not a signal");
    assert_eq!(intercepted.to_string(), "panic: not a signal");
}

#[test]
fn test_handler_count_survives_unwinding() {
    let depths = intercept(|| {
        let outer = handlers_active();
        let inner = intercept(|| -> usize { raise(handlers_active().to_string()) });
        let inner = inner.map_err(|e| e.message().to_owned());
        (outer, inner, handlers_active())
    });

    assert_eq!(
        depths.ok(),
        Some((1, Err(String::from("2")), 1)),
        "Nested handlers should each count once."
    );
    assert_eq!(handlers_active(), 0);
}

#[test]
fn test_handler_count_is_per_thread() {
    let counts = intercept(|| (handlers_active(), thread::spawn(handlers_active).join().ok()));

    assert_eq!(
        counts.ok(),
        Some((1, Some(0))),
        "Another thread shouldn't see this thread's handlers."
    );
}

#[test]
fn test_inner_handler_stops_the_unwind() {
    let result = intercept(|| {
        let inner = intercept(|| -> () { raise("caught early") });
        assert!(inner.is_err());
        "carried on"
    });

    assert_eq!(result.ok(), Some("carried on"));
}

#[test]
fn test_throw() {
    let ok: Result<u8, DiskOnFire> = Ok(3);
    assert_eq!(ok.throw(), 3);

    let result = intercept(|| {
        let err: Result<u8, DiskOnFire> = Err(DiskOnFire);
        err.throw()
    });
    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err(String::from("disk on fire")),
        "Throwing should raise a signal carrying the error's message."
    );
}

#[test]
fn test_raise_error() {
    assert_signals!({ DiskOnFire.raise() });

    let signal: Result<Signal, _> = intercept(|| -> () { DiskOnFire.raise() })
        .expect_err("Raising should unwind.")
        .try_into();
    assert_eq!(signal.ok(), Some(Signal::new("disk on fire")));
}

#[test]
fn test_describe_payloads() {
    assert_eq!(signal::describe(&Signal::new("a")), "a");
    assert_eq!(signal::describe(&"b"), "b");
    assert_eq!(signal::describe(&String::from("c")), "c");
    assert_eq!(signal::describe(&5_u32), "Box<dyn Any>");
}

#[test]
fn test_default_policy() {
    assert_eq!(Policy::default(), Policy::Unwind);
}
