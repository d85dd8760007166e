//! Notifications for back-office events.
//!
//! The engine watches the entity streams for growth (a new pickup,
//! docket, or POD) and evaluates stock levels against reorder points,
//! writing [`Notification`] records into the store. Retained history is
//! capped and low-stock alerts are de-duplicated within a suppression
//! window.

pub mod engine;
pub mod entry;
pub mod ticker;

pub use engine::{NotificationEngine, MAX_NOTIFICATIONS, STOCK_SUPPRESSION_WINDOW};
pub use entry::{Notification, NotificationCategory};
pub use ticker::{spawn_low_stock_ticker, TickerGuard, LOW_STOCK_INTERVAL};
