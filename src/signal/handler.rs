use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::signal::{self, Signal};
use crate::scope::defer;

thread_local! {
    static HANDLERS: Cell<usize> = const { Cell::new(0) };
}

/// What an [`intercept`] frame caught.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum Intercepted {
    Signal(Signal),
    #[from(ignore)]
    #[display("panic: {_0}")]
    Panic(#[error(not(source))] String),
}

impl Intercepted {
    fn from_payload(payload: Box<dyn Any + Send>) -> Intercepted {
        match payload.downcast::<Signal>() {
            Ok(signal) => Intercepted::Signal(*signal),
            Err(other) => Intercepted::Panic(signal::describe(&*other)),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Intercepted::Signal(signal) => signal.message(),
            Intercepted::Panic(message) => message,
        }
    }
}

/// Runs `f` inside an intercepting handler.
///
/// Any unwind that starts inside `f` stops here and comes back as an [`Err`]. By the time this
/// function returns, every owner created inside `f` has already been released, so code handling
/// the error always runs after the cleanup.
///
/// Interception relies on unwinding. In a build with `panic = "abort"` nothing can be
/// intercepted and the process aborts as soon as `f` signals.
///
/// # Examples
/// ```
/// # use scoped_resource::signal::{intercept, raise};
/// let result = intercept(|| -> u32 { raise("out of cheese") });
/// assert_eq!(result.unwrap_err().message(), "out of cheese");
///
/// assert_eq!(intercept(|| 5).ok(), Some(5));
/// ```
pub fn intercept<T, F: FnOnce() -> T>(f: F) -> Result<T, Intercepted> {
    HANDLERS.with(|count| count.set(count.get() + 1));
    let _restore = defer(|| HANDLERS.with(|count| count.set(count.get() - 1)));

    // The closure's state is never observed again after an unwind; the caller only gets the error.
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let intercepted = Intercepted::from_payload(payload);
        tracing::debug!(%intercepted, "intercepted unwind");
        intercepted
    })
}

/// The number of [`intercept`] frames currently active on this thread.
pub fn handlers_active() -> usize {
    HANDLERS.with(Cell::get)
}
