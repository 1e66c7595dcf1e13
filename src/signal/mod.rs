//! Signaled errors and the handlers that intercept them.
//!
//! A signaled error is a panic carrying a [`Signal`] payload. It unwinds the stack, dropping (and
//! therefore releasing) every [`Owner`](crate::scope::Owner) it passes, until it reaches an
//! [`intercept`] frame. If no such frame exists on the current thread, the installed [`Policy`]
//! decides whether the unwind carries on or the process aborts on the spot.

mod handler;
mod policy;
mod signal;
mod tests;

pub use handler::*;
pub use policy::*;
pub use signal::*;

pub use crate::util::result::ResultExtension;
