//! Change propagation for store keys.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Callback = Arc<dyn Fn(&str) + Send + Sync>;

/// Publish/subscribe channel keyed by store key.
///
/// Callbacks are invoked synchronously on the publishing thread. The
/// subscriber list is cloned out before invocation, so a callback may
/// write back to the store without deadlocking.
pub struct ChangeBus {
    subscribers: Mutex<HashMap<String, Vec<Callback>>>,
}

impl ChangeBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(HashMap::new()),
        }
    }

    /// Register a callback for changes to `key`.
    pub fn subscribe(&self, key: &str, callback: impl Fn(&str) + Send + Sync + 'static) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        subscribers
            .entry(key.to_string())
            .or_default()
            .push(Arc::new(callback));
    }

    /// Notify subscribers that `key` changed.
    pub fn publish(&self, key: &str) {
        let callbacks: Vec<Callback> = {
            let subscribers = self
                .subscribers
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            subscribers.get(key).cloned().unwrap_or_default()
        };

        for callback in callbacks {
            callback(key);
        }
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}
