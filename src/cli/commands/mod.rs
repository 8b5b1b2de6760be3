//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations.

pub mod check;
pub mod dispatcher;
pub mod display;
pub mod generate;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
