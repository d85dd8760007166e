//! Persistent keyed JSON store.
//!
//! This module provides [`KeyedStore`], the single durable owner of all
//! application state, and [`ChangeBus`], the publish/subscribe channel
//! that propagates writes to interested observers (including writes made
//! by another process against the same store directory).

pub mod events;
pub mod keyed;

pub use events::ChangeBus;
pub use keyed::KeyedStore;

/// Well-known store keys.
///
/// These match the key layout of the original back-office data directory,
/// so an existing store written by another front end round-trips.
pub mod keys {
    pub const NOTIFICATIONS: &str = "notifications";
    pub const DOCKETS: &str = "dockets";
    pub const PICKUPS: &str = "pickups";
    pub const STOCK_LEVELS: &str = "stockLevels";
    pub const PRODUCTS: &str = "products";
    pub const DELIVERY_RUN_SHEETS: &str = "deliveryRunSheets";
    pub const PODS: &str = "pods";

    /// Persisted observation baseline for resumed notification engines.
    pub const STREAM_BASELINE: &str = "streamBaseline";

    /// Key for a view's persisted table state.
    pub fn table_state(namespace: &str) -> String {
        format!("table_state_{}", namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::keys;

    #[test]
    fn table_state_key_includes_namespace() {
        assert_eq!(keys::table_state("dockets"), "table_state_dockets");
    }
}
