//! Common utilities shared across hello-time crates.

#![deny(clippy::all)]

mod sync;

pub use sync::mutex_lock_or_recover;
