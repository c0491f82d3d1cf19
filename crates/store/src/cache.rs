//! Time-boxed cache of parsed remote records.
//!
//! A single JSON entry `{timestamp, data}` that is only trusted for the
//! configured TTL. Every failure mode — missing, corrupt, stale — reads as
//! a miss, and the caller falls back to the remote fetch. Writes are
//! fire-and-forget.

use aufiles_engine::Record;
use serde::{Deserialize, Serialize};

use crate::kv::KvStore;

/// Storage key for the cached remote records.
const CACHE_KEY: &str = "remote-cache";

/// Default freshness window: 48 hours.
pub const DEFAULT_TTL_MS: i64 = 48 * 60 * 60 * 1000;

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    timestamp: i64,
    data: Vec<Record>,
}

pub struct RemoteCache<S> {
    store: S,
    ttl_ms: i64,
}

impl<S: KvStore> RemoteCache<S> {
    pub fn new(store: S, ttl_ms: i64) -> Self {
        Self { store, ttl_ms }
    }

    /// Cached records, if present and still fresh at `now_ms`.
    pub fn read(&self, now_ms: i64) -> Option<Vec<Record>> {
        let raw = self.store.get(CACHE_KEY)?;
        let entry: CacheEntry = serde_json::from_str(&raw).ok()?;
        if now_ms - entry.timestamp < self.ttl_ms {
            Some(entry.data)
        } else {
            None
        }
    }

    /// Replace the cached records, stamped at `now_ms`.
    pub fn write(&self, now_ms: i64, records: &[Record]) {
        let entry = CacheEntry {
            timestamp: now_ms,
            data: records.to_vec(),
        };
        if let Ok(json) = serde_json::to_string(&entry) {
            self.store.set(CACHE_KEY, &json);
        }
    }
}

/// Current time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemStore;
    use aufiles_engine::model::UNKNOWN;

    fn sample() -> Vec<Record> {
        vec![
            Record::remote("pichipuk", "pichipuk#0001", "00023bde5dd04f3ba92427d9e59359a1"),
            Record::remote("warmapex", "warmapex#2446", UNKNOWN),
        ]
    }

    #[test]
    fn write_then_read_within_ttl() {
        let cache = RemoteCache::new(MemStore::default(), DEFAULT_TTL_MS);
        let records = sample();
        cache.write(1_000, &records);
        assert_eq!(cache.read(1_000 + DEFAULT_TTL_MS - 1), Some(records));
    }

    #[test]
    fn read_after_expiry_is_absent() {
        let cache = RemoteCache::new(MemStore::default(), DEFAULT_TTL_MS);
        cache.write(1_000, &sample());
        assert!(cache.read(1_000 + DEFAULT_TTL_MS).is_none());
    }

    #[test]
    fn missing_entry_is_absent() {
        let cache = RemoteCache::new(MemStore::default(), DEFAULT_TTL_MS);
        assert!(cache.read(0).is_none());
    }

    #[test]
    fn corrupt_entry_reads_as_absent() {
        let store = MemStore::default();
        store.set("remote-cache", "not json {");
        let cache = RemoteCache::new(store, DEFAULT_TTL_MS);
        assert!(cache.read(0).is_none());
    }

    #[test]
    fn entry_without_timestamp_reads_as_absent() {
        let store = MemStore::default();
        store.set("remote-cache", "{\"data\":[]}");
        let cache = RemoteCache::new(store, DEFAULT_TTL_MS);
        assert!(cache.read(0).is_none());
    }

    #[test]
    fn rewrite_replaces_the_entry() {
        let cache = RemoteCache::new(MemStore::default(), DEFAULT_TTL_MS);
        cache.write(1_000, &sample());
        let fresh = vec![Record::remote("solo", "solo#0001", UNKNOWN)];
        cache.write(2_000, &fresh);
        assert_eq!(cache.read(2_500), Some(fresh));
    }
}
