//! Raw resources and the contract they share.
//!
//! Nothing in here releases itself. Each raw resource must be handed back through
//! [`Resource::release`] by hand, and if control leaves the scope first (an early return, a `?`,
//! a signaled error) it is simply leaked. Wrap one in an [`Owner`](crate::scope::Owner) to tie its
//! release to the scope instead.

mod cell;
#[cfg(all(feature = "fs", target_os = "linux"))]
mod fd;
mod resource;
mod tests;

pub use cell::*;
#[cfg(all(feature = "fs", target_os = "linux"))]
pub use fd::*;
pub use resource::*;
