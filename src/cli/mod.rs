//! CLI module - argument parsing, command handlers and logging setup

pub mod args;
pub mod commands;
pub mod logging;

pub use args::{Cli, Command};
pub use commands::run;
