//! Domain record types and entity streams.
//!
//! The record types mirror the JSON shape of the collections the CRUD
//! screens write into the store. [`EntityStreams`] gives the notification
//! engine and the CLI point-in-time, read-only snapshots of them.

pub mod records;
pub mod streams;

pub use records::{DeliveryRunSheet, Docket, Pickup, Pod, Product, StockLevel};
pub use streams::EntityStreams;
