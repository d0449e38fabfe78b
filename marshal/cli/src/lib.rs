//! Command implementations for the `marshal` binary.
//!
//! Each command writes to a caller-supplied writer so it can be exercised
//! without spawning the binary.

pub mod commands;
pub mod error;

pub use error::CliError;
