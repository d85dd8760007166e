//! CLI command implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::domain::EntityStreams;
use crate::error::Result;
use crate::notify::{spawn_low_stock_ticker, NotificationEngine};
use crate::store::{keys, KeyedStore};

use super::args::{Cli, Commands, NotificationsSubcommand, WatchArgs};

/// Default store directory, relative to the current directory.
pub const DEFAULT_STORE_DIR: &str = ".dockhand/store";

/// Execute the parsed CLI, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let dir = cli
        .store_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));
    let store = Arc::new(KeyedStore::open(dir));

    match cli.command {
        Commands::Status => status(&store),
        Commands::Notifications(args) => notifications(&store, &args.command),
        Commands::Check => check(&store),
        Commands::Watch(args) => watch(&store, &args),
    }
}

fn status(store: &Arc<KeyedStore>) -> Result<i32> {
    let streams = EntityStreams::new(store);
    let engine = NotificationEngine::new(store.clone());

    println!("Pickups:              {}", streams.pickups().len());
    println!("Dockets:              {}", streams.dockets().len());
    println!("PODs:                 {}", streams.pods().len());
    println!("Stock levels:         {}", streams.stock_levels().len());
    println!("Products:             {}", streams.products().len());
    println!("Run sheets:           {}", streams.delivery_run_sheets().len());
    println!("Unread notifications: {}", engine.unread_count());

    Ok(0)
}

fn notifications(store: &Arc<KeyedStore>, command: &NotificationsSubcommand) -> Result<i32> {
    let engine = NotificationEngine::new(store.clone());

    match command {
        NotificationsSubcommand::List { unread } => {
            let list = engine.notifications();
            let entries: Vec<_> = list.iter().filter(|n| !*unread || !n.read).collect();

            if entries.is_empty() {
                println!("No notifications.");
                return Ok(0);
            }

            for entry in entries {
                let marker = if entry.read { " " } else { "*" };
                println!(
                    "{} {}  [{}]  {}  {}: {}",
                    marker,
                    entry.created_at.format("%Y-%m-%d %H:%M"),
                    entry.category,
                    entry.id,
                    entry.title,
                    entry.message
                );
            }
            Ok(0)
        }
        NotificationsSubcommand::MarkRead { id } => {
            if engine.mark_as_read(id) {
                println!("Marked {} as read.", id);
                Ok(0)
            } else {
                println!("No notification with ID {}.", id);
                Ok(1)
            }
        }
        NotificationsSubcommand::MarkAllRead => {
            let count = engine.unread_count();
            engine.mark_all_as_read();
            println!("Marked {} notification(s) as read.", count);
            Ok(0)
        }
        NotificationsSubcommand::Clear => {
            engine.clear_notifications();
            println!("Cleared notifications.");
            Ok(0)
        }
    }
}

fn check(store: &Arc<KeyedStore>) -> Result<i32> {
    // One-shot cycle: the observation baseline is persisted across
    // invocations, so records added since the last check count as growth.
    // The first ever check only records the baseline.
    let engine = NotificationEngine::resume(store.clone());
    let emitted = engine.observe() + engine.check_low_stock(Utc::now());

    println!("Emitted {} notification(s).", emitted);
    println!("Unread notifications: {}", engine.unread_count());
    Ok(0)
}

fn watch(store: &Arc<KeyedStore>, args: &WatchArgs) -> Result<i32> {
    let engine = Arc::new(NotificationEngine::resume(store.clone()));
    engine.watch_streams();

    let interval = Duration::from_secs(args.interval.max(1));
    println!(
        "Watching streams and stock levels every {}s (Ctrl-C to stop)",
        interval.as_secs()
    );
    let _guard = spawn_low_stock_ticker(engine, interval);

    // Re-read the watched collections so writes from other processes
    // surface on the change bus and trigger observation cycles.
    loop {
        std::thread::sleep(Duration::from_secs(1));
        for key in [keys::PICKUPS, keys::DOCKETS, keys::PODS] {
            store.refresh(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pickup;
    use tempfile::TempDir;

    #[test]
    fn first_check_treats_existing_records_as_baseline() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(KeyedStore::open(temp.path()));
        store.set(
            keys::PICKUPS,
            &vec![Pickup {
                id: "PU-1".into(),
                ..Default::default()
            }],
        );

        // Pre-existing pickups do not count as growth.
        assert_eq!(check(&store).unwrap(), 0);
        let engine = NotificationEngine::new(store.clone());
        assert_eq!(engine.unread_count(), 0);
    }

    #[test]
    fn later_check_detects_growth_since_baseline() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(KeyedStore::open(temp.path()));
        store.set(keys::PICKUPS, &Vec::<Pickup>::new());

        assert_eq!(check(&store).unwrap(), 0);

        store.set(
            keys::PICKUPS,
            &vec![Pickup {
                id: "PU-1".into(),
                customer_name: "Acme Freight".into(),
                ..Default::default()
            }],
        );

        assert_eq!(check(&store).unwrap(), 0);
        let engine = NotificationEngine::new(store.clone());
        assert_eq!(engine.unread_count(), 1);
    }
}
