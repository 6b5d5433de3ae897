//! Command-line interface
//!
//! Argument parsing for the `nip7-qr` tool.

pub mod commands;

pub use commands::{Command, Opt};
