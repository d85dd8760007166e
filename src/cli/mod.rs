//! Command-line interface for Dockhand.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, NotificationsArgs, NotificationsSubcommand, WatchArgs};
