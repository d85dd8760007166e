//! Periodic low-stock evaluation.
//!
//! The back office re-evaluates stock levels on a fixed wall-clock
//! interval. The ticker runs one check immediately, then repeats until
//! its guard is dropped; dropping the guard stops the thread before the
//! next check and joins it, so no check runs after teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::Utc;

use super::engine::NotificationEngine;

/// Default interval between low-stock evaluations.
pub const LOW_STOCK_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Handle to a running low-stock ticker. Dropping it stops the ticker.
pub struct TickerGuard {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickerGuard {
    /// Stop the ticker and wait for the thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("Low-stock ticker thread panicked");
            }
        }
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Start a background low-stock ticker.
///
/// Runs one evaluation immediately, then every `interval`.
pub fn spawn_low_stock_ticker(
    engine: Arc<NotificationEngine>,
    interval: Duration,
) -> TickerGuard {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();

    let handle = thread::spawn(move || {
        loop {
            if stop_flag.load(Ordering::SeqCst) {
                return;
            }

            let emitted = engine.check_low_stock(Utc::now());
            if emitted > 0 {
                tracing::info!("Low-stock check emitted {} notification(s)", emitted);
            }

            // Sleep in short slices so a dropped guard stops us promptly.
            let deadline = Instant::now() + interval;
            while Instant::now() < deadline {
                if stop_flag.load(Ordering::SeqCst) {
                    return;
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    });

    TickerGuard {
        stop,
        handle: Some(handle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, StockLevel};
    use crate::store::{keys, KeyedStore};
    use tempfile::TempDir;

    fn low_stock_store() -> (TempDir, Arc<KeyedStore>) {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(KeyedStore::open(temp.path()));
        store.set(
            keys::PRODUCTS,
            &vec![Product {
                id: "P1".into(),
                name: "Pallet wrap".into(),
                reorder_point: 5.0,
            }],
        );
        store.set(
            keys::STOCK_LEVELS,
            &vec![StockLevel {
                id: "S1".into(),
                product_id: "P1".into(),
                available_qty: 2.0,
            }],
        );
        (temp, store)
    }

    #[test]
    fn ticker_runs_initial_check() {
        let (_temp, store) = low_stock_store();
        let engine = Arc::new(NotificationEngine::new(store));

        let guard = spawn_low_stock_ticker(engine.clone(), Duration::from_secs(3600));
        // The initial check runs at spawn; poll briefly for it.
        let deadline = Instant::now() + Duration::from_secs(2);
        while engine.unread_count() == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        guard.stop();

        assert_eq!(engine.unread_count(), 1);
    }

    #[test]
    fn dropped_guard_stops_ticker() {
        let (_temp, store) = low_stock_store();
        let engine = Arc::new(NotificationEngine::new(store));

        {
            let _guard = spawn_low_stock_ticker(engine.clone(), Duration::from_millis(50));
            thread::sleep(Duration::from_millis(120));
        }

        // Suppression holds the count at one regardless, so clear and
        // verify no further checks run after the guard is gone.
        engine.clear_notifications();
        thread::sleep(Duration::from_millis(150));
        assert_eq!(engine.unread_count(), 0);
    }
}
