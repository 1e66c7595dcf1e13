//! Scope-bound owners of resources.
//!
//! [`Owner`] is the centerpiece: it acquires a [`Resource`](crate::resource::Resource) when it's
//! created and releases it when it's dropped, however the enclosing scope is left. [`Defer`] does
//! the same for an arbitrary closure. [`Observer`]s get told about each acquisition and release,
//! which is how the demo prints its messages and how the tests check ordering.

mod defer;
mod observer;
mod owner;

pub use defer::*;
pub use observer::*;
pub use owner::*;
