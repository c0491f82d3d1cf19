//! One-shot submission log.
//!
//! Pre-filled submissions (import links) must run exactly once per distinct
//! parameter set. The log keys each attempt by the parameter values
//! themselves, so re-importing the same link is a no-op regardless of
//! process lifetime.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::kv::KvStore;

/// Storage key for the processed-parameter-set markers.
const LOG_KEY: &str = "submitted";

pub struct SubmitLog<S> {
    store: S,
}

impl<S: KvStore> SubmitLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Hash the parameter set into a stable marker.
    fn marker(identifier: &str, friend_code: &str, puid: &str) -> String {
        let mut hasher = DefaultHasher::new();
        (identifier, friend_code, puid).hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }

    fn load(&self) -> HashSet<String> {
        self.store
            .get(LOG_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Has this exact parameter set been processed before?
    pub fn already_processed(&self, identifier: &str, friend_code: &str, puid: &str) -> bool {
        self.load().contains(&Self::marker(identifier, friend_code, puid))
    }

    /// Record that this parameter set has been processed.
    pub fn mark_processed(&self, identifier: &str, friend_code: &str, puid: &str) {
        let mut markers = self.load();
        markers.insert(Self::marker(identifier, friend_code, puid));
        if let Ok(json) = serde_json::to_string(&markers) {
            self.store.set(LOG_KEY, &json);
        }
    }
}
