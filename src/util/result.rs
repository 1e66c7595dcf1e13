use std::error::Error;

use crate::signal::Signal;

pub trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and, rather than panicking with a debug message, raises a [`Signal`] carrying the
    /// message of the error itself.
    ///
    /// # Panics
    /// Unwinds with a [`Signal`] payload if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => Signal::from_error(&error).raise(),
        }
    }
}
