//! Command-line interface for pytest-mirror.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, GenerateArgs, ValidateArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
