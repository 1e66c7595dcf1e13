use std::any::Any;
use std::error::Error;
use std::panic;

use derive_more::{Display, Error};

/// The payload of a signaled error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message}")]
pub struct Signal {
    message: String,
}

impl Signal {
    pub fn new<M: Into<String>>(message: M) -> Signal {
        Signal {
            message: message.into(),
        }
    }

    pub fn from_error<E: Error + ?Sized>(error: &E) -> Signal {
        Signal::new(error.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Unwinds the current thread with this signal as the payload.
    ///
    /// The panic hook still runs, so an installed [`Policy`](super::Policy) gets to see the signal
    /// before any unwinding happens.
    ///
    /// # Panics
    /// Always, that's the point.
    pub fn raise(self) -> ! {
        tracing::trace!(message = %self.message, "raising signal");
        panic::panic_any(self)
    }

    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Option<&Signal> {
        payload.downcast_ref::<Signal>()
    }
}

/// Raises a [`Signal`] with the provided message.
///
/// # Panics
/// Always.
pub fn raise<M: Into<String>>(message: M) -> ! {
    Signal::new(message).raise()
}

/// Lets any [`Error`] be raised as a signaled error carrying its message.
pub trait Raise: Error {
    /// # Panics
    /// Always.
    fn raise(&self) -> ! {
        Signal::from_error(self).raise()
    }
}

/// Renders an arbitrary panic payload, the same way the default hook would.
pub(crate) fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(signal) = Signal::from_payload(payload) {
        signal.message.clone()
    } else if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("Box<dyn Any>")
    }
}
