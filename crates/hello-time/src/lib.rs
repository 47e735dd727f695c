#![deny(clippy::all)]

pub mod commands;
pub mod common;
pub mod handlers;

pub use commands::Cli;
pub use commands::Commands;
