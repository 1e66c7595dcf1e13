//! This crate is a small, executable take on RAII (Resource Acquisition Is Initialization).
//!
//! # Purpose
//! RAII ties the release of a resource to the end of a scope instead of to an explicit cleanup
//! call. Whatever path control takes out of the scope (falling off the end, an early `return`, a
//! `?`, or unwinding from a panic), the release runs exactly once. Rust gives us this for free
//! through [`Drop`], so most of the code here is about making the guarantee observable and
//! spelling out where it stops holding.
//!
//! # Layout
//! - [`resource`] defines the [`Resource`](resource::Resource) contract and some raw resources.
//!   Used bare, a raw resource is released manually and leaks if control leaves early.
//! - [`scope`] provides [`Owner`](scope::Owner), which acquires a resource when it's created and
//!   releases it when it's dropped, plus [`Defer`](scope::Defer) for one-off cleanup closures.
//! - [`signal`] models signaled errors: [`raise`](signal::raise) unwinds,
//!   [`intercept`](signal::intercept) stops the unwind, and [`Policy`](signal::Policy) decides what
//!   happens when nothing intercepts it.
//!
//! # The Caveat
//! Release is guaranteed for every owner that actually gets unwound past. If a signaled error
//! reaches the top of the stack and the runtime aborts instead of unwinding (see
//! [`Policy::Abort`](signal::Policy::Abort), or a build with `panic = "abort"`), owners that are
//! still on the stack never run their release. That isn't a bug to fix, it's the boundary of the
//! guarantee.
//!
//! # Dependencies
//! Errors are derived with `derive_more`, logging goes through `tracing`, and the
//! [`FileHandle`](resource::FileHandle) resource relies on `libc` for its thin syscall wrappers.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod resource;
pub mod scope;
pub mod signal;

pub(crate) mod util;
