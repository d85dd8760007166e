//! Notification engine.
//!
//! Watches the entity streams for growth, evaluates low stock against
//! reorder points, and manages the persisted notification history.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::EntityStreams;
use crate::store::{keys, KeyedStore};

use super::entry::{Notification, NotificationCategory};

/// Maximum number of notifications retained, oldest dropped first.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Window within which an unread low-stock alert suppresses a duplicate.
pub const STOCK_SUPPRESSION_WINDOW: Duration = Duration::hours(24);

/// Last-seen stream lengths for growth detection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct StreamCursor {
    pickups: usize,
    dockets: usize,
    pods: usize,
}

/// Watches entity streams and manages notification history.
///
/// The engine holds `lastSeenCount` per watched stream, initialized at
/// construction, so collections that already exist when the engine starts
/// do not produce a burst of notifications. [`resume`](Self::resume)
/// persists that baseline in the store instead, so short-lived processes
/// detect growth that happened between runs.
pub struct NotificationEngine {
    store: Arc<KeyedStore>,
    last_seen: Mutex<StreamCursor>,
    persist_cursor: bool,
}

impl NotificationEngine {
    /// Create an engine over `store`, snapshotting current stream lengths.
    pub fn new(store: Arc<KeyedStore>) -> Self {
        let cursor = Self::snapshot(&store);
        Self {
            store,
            last_seen: Mutex::new(cursor),
            persist_cursor: false,
        }
    }

    /// Create an engine whose observation baseline survives restarts.
    ///
    /// The baseline is loaded from the store, falling back to the current
    /// stream lengths on first use, and written back after every
    /// observation cycle. A one-shot process can therefore observe growth
    /// that happened since the previous invocation.
    pub fn resume(store: Arc<KeyedStore>) -> Self {
        let stored: Option<StreamCursor> = store.get(keys::STREAM_BASELINE, None);
        let cursor = stored.unwrap_or_else(|| Self::snapshot(&store));
        Self {
            store,
            last_seen: Mutex::new(cursor),
            persist_cursor: true,
        }
    }

    fn snapshot(store: &KeyedStore) -> StreamCursor {
        let streams = EntityStreams::new(store);
        StreamCursor {
            pickups: streams.pickups().len(),
            dockets: streams.dockets().len(),
            pods: streams.pods().len(),
        }
    }

    /// Run an observation cycle whenever a watched stream changes.
    ///
    /// Subscribes to the watched keys on the store's change bus, so any
    /// write to pickups, dockets, or PODs through this store triggers
    /// [`observe`](Self::observe). Only a weak reference is captured;
    /// dropping the last external handle to the engine retires the
    /// subscriptions.
    pub fn watch_streams(self: &Arc<Self>) {
        for key in [keys::PICKUPS, keys::DOCKETS, keys::PODS] {
            let engine = Arc::downgrade(self);
            self.store.subscribe(key, move |_| {
                if let Some(engine) = engine.upgrade() {
                    engine.observe();
                }
            });
        }
    }

    fn last_seen_lock(&self) -> std::sync::MutexGuard<'_, StreamCursor> {
        self.last_seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run one observation cycle over the watched streams.
    ///
    /// A stream that grew since the last cycle yields one notification
    /// synthesized from its last element. Last-seen counts are updated
    /// unconditionally, so a shrink (a deletion) never causes a false
    /// positive on the next growth. Returns the number emitted.
    pub fn observe(&self) -> usize {
        let streams = EntityStreams::new(&self.store);
        let pickups = streams.pickups();
        let dockets = streams.dockets();
        let pods = streams.pods();

        // Decide what to emit and update the baseline before touching the
        // store, so a subscriber reacting to the write can re-enter.
        let mut pending = Vec::new();
        let cursor = {
            let mut last_seen = self.last_seen_lock();

            if pickups.len() > last_seen.pickups {
                if let Some(pickup) = pickups.last() {
                    pending.push((
                        NotificationCategory::Pickup,
                        "New Pickup Scheduled".to_string(),
                        format!(
                            "Pickup for {} on {}",
                            pickup.customer_name, pickup.pickup_date
                        ),
                        Some(pickup.id.clone()),
                    ));
                }
            }
            last_seen.pickups = pickups.len();

            if dockets.len() > last_seen.dockets {
                if let Some(docket) = dockets.last() {
                    pending.push((
                        NotificationCategory::Docket,
                        "New Docket Created".to_string(),
                        format!(
                            "Docket {} for {}",
                            docket.docket_number, docket.customer_name
                        ),
                        Some(docket.id.clone()),
                    ));
                }
            }
            last_seen.dockets = dockets.len();

            if pods.len() > last_seen.pods {
                if let Some(pod) = pods.last() {
                    pending.push((
                        NotificationCategory::Pod,
                        "POD Received".to_string(),
                        format!(
                            "Proof of delivery received for docket {}",
                            pod.docket_number
                        ),
                        Some(pod.id.clone()),
                    ));
                }
            }
            last_seen.pods = pods.len();
            *last_seen
        };
        if self.persist_cursor {
            self.store.set(keys::STREAM_BASELINE, &cursor);
        }

        let emitted = pending.len();
        for (category, title, message, entity_id) in pending {
            self.add_notification(category, title, message, entity_id);
        }
        emitted
    }

    /// Evaluate stock levels against reorder points as of `now`.
    ///
    /// A stock level at or below its product's reorder point emits a
    /// `stock` notification, unless an unread `stock` notification for the
    /// same entity was created within the suppression window. Stock levels
    /// with no matching product are skipped. Returns the number emitted.
    pub fn check_low_stock(&self, now: DateTime<Utc>) -> usize {
        let streams = EntityStreams::new(&self.store);
        let products: HashMap<String, _> = streams
            .products()
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        let mut emitted = 0;
        for level in streams.stock_levels() {
            let Some(product) = products.get(&level.product_id) else {
                continue;
            };
            if level.available_qty > product.reorder_point {
                continue;
            }
            if self.is_stock_alert_suppressed(&level.product_id, now) {
                continue;
            }

            self.add_notification(
                NotificationCategory::Stock,
                "Low Stock Alert",
                format!(
                    "{} is below reorder point ({} on hand, reorder at {})",
                    product.name, level.available_qty, product.reorder_point
                ),
                Some(level.product_id.clone()),
            );
            emitted += 1;
        }

        emitted
    }

    /// Whether an unread stock alert for `entity_id` was created within
    /// the suppression window ending at `now`.
    fn is_stock_alert_suppressed(&self, entity_id: &str, now: DateTime<Utc>) -> bool {
        self.notifications().iter().any(|n| {
            n.category == NotificationCategory::Stock
                && !n.read
                && n.entity_id.as_deref() == Some(entity_id)
                && now.signed_duration_since(n.created_at) < STOCK_SUPPRESSION_WINDOW
        })
    }

    /// Append a notification and persist the capped history.
    ///
    /// The new entry goes in front (newest first) and the list is
    /// truncated to [`MAX_NOTIFICATIONS`]. Returns the stored entry.
    pub fn add_notification(
        &self,
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
        entity_id: Option<String>,
    ) -> Notification {
        let entry = Notification::new(category, title, message, entity_id);

        let mut list = self.notifications();
        list.insert(0, entry.clone());
        list.truncate(MAX_NOTIFICATIONS);
        self.store.set(keys::NOTIFICATIONS, &list);

        entry
    }

    /// Current notification history, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.store.get(keys::NOTIFICATIONS, Vec::new())
    }

    /// Count of unread notifications, recomputed on every call.
    pub fn unread_count(&self) -> usize {
        self.notifications().iter().filter(|n| !n.read).count()
    }

    /// Mark one notification as read. No-op when the ID is absent.
    ///
    /// Returns whether a matching entry was found.
    pub fn mark_as_read(&self, id: &str) -> bool {
        let mut list = self.notifications();
        let mut found = false;

        for entry in &mut list {
            if entry.id == id {
                entry.read = true;
                found = true;
                break;
            }
        }

        if found {
            self.store.set(keys::NOTIFICATIONS, &list);
        }
        found
    }

    /// Mark every notification as read.
    pub fn mark_all_as_read(&self) {
        let mut list = self.notifications();
        for entry in &mut list {
            entry.read = true;
        }
        self.store.set(keys::NOTIFICATIONS, &list);
    }

    /// Empty the notification history.
    pub fn clear_notifications(&self) {
        self.store.set(keys::NOTIFICATIONS, &Vec::<Notification>::new());
    }
}
