//! Command-line interface for trailog.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AddArgs, Cli, Commands, DeleteArgs, EditArgs, ListArgs, MetricArgs, ResetArgs, ShowArgs,
    SortArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
