//! Notification record types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Pickup,
    Delivery,
    Stock,
    Pod,
    Docket,
    #[default]
    Info,
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
            Self::Stock => "stock",
            Self::Pod => "pod",
            Self::Docket => "docket",
            Self::Info => "info",
        };
        f.write_str(name)
    }
}

/// A single notification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification ID, assigned at creation.
    pub id: String,
    /// Notification category.
    pub category: NotificationCategory,
    /// Short title.
    pub title: String,
    /// Human-readable message.
    pub message: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Whether the notification has been read.
    #[serde(default)]
    pub read: bool,
    /// Identifier of the related entity, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl Notification {
    /// Create a new unread notification stamped with the current time.
    pub fn new(
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
        entity_id: Option<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            category,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
            entity_id,
        }
    }
}

/// Generate a notification ID.
///
/// Format: `ntf_{timestamp_ms}_{random_hex}`. The random suffix keeps
/// collision probability negligible when two notifications land on the
/// same millisecond.
fn generate_id() -> String {
    let mut random = [0u8; 4];
    getrandom::getrandom(&mut random).expect("Failed to generate random bytes");
    format!("ntf_{}_{}", Utc::now().timestamp_millis(), hex::encode(random))
}
