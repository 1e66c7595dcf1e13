#![cfg(test)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// Increments a shared counter every time a clone of it is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Arc<AtomicUsize>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Arc::new(AtomicUsize::new(value)))
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}
