//! Command modules for the sayc CLI.
//!
//! Each subcommand lives in its own file; shared helpers are in `common`.

pub mod check;
pub mod common;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
