/// A guard that runs a closure exactly once when it goes out of scope, including during
/// unwinding.
///
/// Bind the guard to a named variable: `let _ = defer(..)` drops it (and runs the closure) on the
/// spot.
///
/// # Examples
/// ```
/// # use scoped_resource::scope::defer;
/// # use std::cell::Cell;
/// let ran = Cell::new(false);
/// {
///     let _guard = defer(|| ran.set(true));
///     assert!(!ran.get());
/// }
/// assert!(ran.get());
/// ```
#[must_use = "the deferred closure runs as soon as the guard is dropped"]
pub struct Defer<F: FnOnce()> {
    action: Option<F>,
}

pub const fn defer<F: FnOnce()>(action: F) -> Defer<F> {
    Defer {
        action: Some(action),
    }
}

impl<F: FnOnce()> Defer<F> {
    /// Disarms the guard, the closure is dropped without being run.
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}
