//! Domain record types.
//!
//! Field names follow the store's camelCase JSON layout. Every field has
//! a serde default so a record written by an older or partial front end
//! still deserializes; unknown extra fields are ignored by serde.

use serde::{Deserialize, Serialize};

/// A scheduled collection request from a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pickup {
    pub id: String,
    pub customer_name: String,
    pub pickup_date: String,
    pub status: String,
}

/// A shipment/consignment record tracked through statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Docket {
    pub id: String,
    pub docket_number: String,
    pub customer_name: String,
    pub status: String,
}

/// A proof-of-delivery record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pod {
    pub id: String,
    pub docket_number: String,
    pub received_by: String,
}

/// Current stock on hand for a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockLevel {
    pub id: String,
    pub product_id: String,
    pub available_qty: f64,
}

/// A product with its restocking threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub reorder_point: f64,
}

/// A delivery run sheet for a driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryRunSheet {
    pub id: String,
    pub run_date: String,
    pub driver: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickup_uses_camel_case_field_names() {
        let pickup = Pickup {
            id: "PU-1".into(),
            customer_name: "Acme Freight".into(),
            pickup_date: "2026-08-25".into(),
            status: "scheduled".into(),
        };

        let json = serde_json::to_string(&pickup).unwrap();
        assert!(json.contains("customerName"));
        assert!(json.contains("pickupDate"));
    }

    #[test]
    fn stock_level_deserializes_from_store_layout() {
        let level: StockLevel =
            serde_json::from_str(r#"{"id":"S1","productId":"P1","availableQty":3}"#).unwrap();

        assert_eq!(level.product_id, "P1");
        assert_eq!(level.available_qty, 3.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let docket: Docket = serde_json::from_str(r#"{"id":"D-1"}"#).unwrap();

        assert_eq!(docket.id, "D-1");
        assert!(docket.docket_number.is_empty());
        assert!(docket.status.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let product: Product = serde_json::from_str(
            r#"{"id":"P1","name":"Pallet wrap","reorderPoint":5,"supplier":"n/a"}"#,
        )
        .unwrap();

        assert_eq!(product.reorder_point, 5.0);
    }
}
