//! Dockhand - back-office state core for logistics operations.
//!
//! Dockhand owns the durable state behind a logistics back office:
//! a keyed JSON store shared by every screen, read-only streams over the
//! domain collections (pickups, dockets, PODs, stock), a notification
//! engine that watches those streams, and persisted per-view table state.
//!
//! # Modules
//!
//! - [`store`] - Persistent keyed JSON store with change propagation
//! - [`domain`] - Domain record types and read-only entity streams
//! - [`notify`] - Notification records, engine, and low-stock ticker
//! - [`table`] - Per-view table state and pagination
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use dockhand::store::KeyedStore;
//!
//! let temp = std::env::temp_dir().join("dockhand-doc");
//! let store = KeyedStore::open(&temp);
//! store.set("pickups", &vec!["PU-1001".to_string()]);
//! let pickups: Vec<String> = store.get("pickups", Vec::new());
//! assert_eq!(pickups, vec!["PU-1001"]);
//! # std::fs::remove_dir_all(&temp).ok();
//! ```

pub mod cli;
pub mod domain;
pub mod error;
pub mod notify;
pub mod store;
pub mod table;

pub use error::{DockhandError, Result};
