use std::sync::{Arc, Mutex, PoisonError};

use derive_more::Display;

/// How an [`Owner`](super::Owner) came to release its resource.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The owner went out of scope without a panic in progress: falling off the end, an early
    /// return or a `?`.
    Scope,
    /// The owner was dropped while the thread was unwinding.
    Unwind,
    /// [`Owner::release`](super::Owner::release) was called.
    Explicit,
}

/// Gets told when an [`Owner`](super::Owner) acquires and releases its resource.
pub trait Observer {
    fn acquired(&self, _kind: &'static str) {}

    fn released(&self, _kind: &'static str, _exit: Exit) {}
}

/// Doesn't observe anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Observer for Silent {}

/// Prints the classic RAII demo messages to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Observer for Console {
    fn acquired(&self, _kind: &'static str) {
        println!("allocating the resource");
    }

    fn released(&self, _kind: &'static str, _exit: Exit) {
        println!("cleaning up the resource");
    }
}

impl<O: Observer + ?Sized> Observer for &O {
    fn acquired(&self, kind: &'static str) {
        (**self).acquired(kind);
    }

    fn released(&self, kind: &'static str, exit: Exit) {
        (**self).released(kind, exit);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Acquired(&'static str),
    Released(&'static str, Exit),
    Mark(&'static str),
}

/// A shared, append-only log of [`Event`]s. Clones write to the same log, so one can be handed to
/// an owner while another stays behind to be inspected.
#[derive(Debug, Default, Clone)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    pub fn new() -> Journal {
        Journal::default()
    }

    /// Records an arbitrary point in time, so that it can be ordered against acquisitions and
    /// releases.
    pub fn mark(&self, label: &'static str) {
        self.push(Event::Mark(label));
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn releases(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, Event::Released(..)))
            .count()
    }

    fn push(&self, event: Event) {
        // The log is only ever appended to, so a poisoned lock still holds consistent data.
        self.0.lock().unwrap_or_else(PoisonError::into_inner).push(event);
    }
}

impl Observer for Journal {
    fn acquired(&self, kind: &'static str) {
        self.push(Event::Acquired(kind));
    }

    fn released(&self, kind: &'static str, exit: Exit) {
        self.push(Event::Released(kind, exit));
    }
}
