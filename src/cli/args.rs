//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::notify::LOW_STOCK_INTERVAL;

/// Dockhand - back-office state for logistics operations.
#[derive(Debug, Parser)]
#[command(name = "dockhand")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store directory (overrides default .dockhand/store)
    #[arg(short, long, global = true, env = "DOCKHAND_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show record counts and unread notifications
    Status,

    /// List and manage notifications
    Notifications(NotificationsArgs),

    /// Run one observation cycle and one low-stock evaluation
    Check,

    /// Evaluate stock levels on an interval until interrupted
    Watch(WatchArgs),
}

/// Arguments for the `notifications` command.
#[derive(Debug, Clone, Args)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: NotificationsSubcommand,
}

/// Notification subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum NotificationsSubcommand {
    /// List notifications, newest first.
    List {
        /// Show only unread notifications.
        #[arg(long)]
        unread: bool,
    },
    /// Mark one notification as read.
    MarkRead {
        /// Notification ID.
        id: String,
    },
    /// Mark every notification as read.
    MarkAllRead,
    /// Empty the notification history.
    Clear,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Args)]
pub struct WatchArgs {
    /// Seconds between low-stock evaluations.
    #[arg(long, default_value_t = LOW_STOCK_INTERVAL.as_secs())]
    pub interval: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_status() {
        let cli = Cli::parse_from(["dockhand", "status"]);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn parses_store_dir_flag() {
        let cli = Cli::parse_from(["dockhand", "--store-dir", "/tmp/store", "status"]);
        assert_eq!(cli.store_dir, Some(PathBuf::from("/tmp/store")));
    }

    #[test]
    fn parses_notifications_list_unread() {
        let cli = Cli::parse_from(["dockhand", "notifications", "list", "--unread"]);
        match cli.command {
            Commands::Notifications(args) => {
                assert!(matches!(
                    args.command,
                    NotificationsSubcommand::List { unread: true }
                ));
            }
            _ => panic!("expected notifications subcommand"),
        }
    }

    #[test]
    fn watch_interval_defaults_to_low_stock_interval() {
        let cli = Cli::parse_from(["dockhand", "watch"]);
        match cli.command {
            Commands::Watch(args) => {
                assert_eq!(args.interval, LOW_STOCK_INTERVAL.as_secs());
                assert_eq!(args.interval, 300);
            }
            _ => panic!("expected watch subcommand"),
        }
    }
}
