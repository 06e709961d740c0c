//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the satudata binary.

mod commands;
mod handlers;
mod output;

pub use commands::{Cli, Commands};
pub use handlers::handle_command;
