//! Read-only views over the domain collections.

use crate::store::{keys, KeyedStore};

use super::records::{DeliveryRunSheet, Docket, Pickup, Pod, Product, StockLevel};

/// Point-in-time snapshots of the entity collections.
///
/// The collections are owned and mutated by the CRUD screens; everything
/// here is a read. Each call returns the collection as currently held in
/// the store, falling back to empty when a key is absent or unparseable.
pub struct EntityStreams<'a> {
    store: &'a KeyedStore,
}

impl<'a> EntityStreams<'a> {
    /// Create streams over `store`.
    pub fn new(store: &'a KeyedStore) -> Self {
        Self { store }
    }

    pub fn pickups(&self) -> Vec<Pickup> {
        self.store.get(keys::PICKUPS, Vec::new())
    }

    pub fn dockets(&self) -> Vec<Docket> {
        self.store.get(keys::DOCKETS, Vec::new())
    }

    pub fn pods(&self) -> Vec<Pod> {
        self.store.get(keys::PODS, Vec::new())
    }

    pub fn stock_levels(&self) -> Vec<StockLevel> {
        self.store.get(keys::STOCK_LEVELS, Vec::new())
    }

    pub fn products(&self) -> Vec<Product> {
        self.store.get(keys::PRODUCTS, Vec::new())
    }

    pub fn delivery_run_sheets(&self) -> Vec<DeliveryRunSheet> {
        self.store.get(keys::DELIVERY_RUN_SHEETS, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_store_yields_empty_streams() {
        let temp = TempDir::new().unwrap();
        let store = KeyedStore::open(temp.path());
        let streams = EntityStreams::new(&store);

        assert!(streams.pickups().is_empty());
        assert!(streams.dockets().is_empty());
        assert!(streams.pods().is_empty());
        assert!(streams.stock_levels().is_empty());
        assert!(streams.products().is_empty());
        assert!(streams.delivery_run_sheets().is_empty());
    }

    #[test]
    fn streams_reflect_store_contents() {
        let temp = TempDir::new().unwrap();
        let store = KeyedStore::open(temp.path());

        store.set(
            keys::PICKUPS,
            &vec![Pickup {
                id: "PU-1".into(),
                customer_name: "Acme Freight".into(),
                ..Default::default()
            }],
        );

        let streams = EntityStreams::new(&store);
        let pickups = streams.pickups();
        assert_eq!(pickups.len(), 1);
        assert_eq!(pickups[0].customer_name, "Acme Freight");
    }

    #[test]
    fn snapshot_is_point_in_time() {
        let temp = TempDir::new().unwrap();
        let store = KeyedStore::open(temp.path());
        let streams = EntityStreams::new(&store);

        let before = streams.dockets();
        store.set(
            keys::DOCKETS,
            &vec![Docket {
                id: "D-1".into(),
                ..Default::default()
            }],
        );
        let after = streams.dockets();

        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
    }
}
