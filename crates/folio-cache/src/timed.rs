//! Timestamped cache entries over a key-value store.
//!
//! Entries are stored as `{"data": ..., "timestamp": <epoch ms>}`. Freshness
//! is decided by the caller through a [`CachePolicy`], so a stale entry can
//! still be served while a refresh runs.

use std::sync::Arc;
use std::time::Duration;

use folio_core::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::KeyValueStore;

/// Serialized form of one cached value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: i64,
}

/// Which entry to use and how long it stays fresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    pub key: String,
    pub ttl: Duration,
}

impl CachePolicy {
    pub fn new(key: impl Into<String>, ttl: Duration) -> Self {
        Self {
            key: key.into(),
            ttl,
        }
    }

    /// Fresh while strictly younger than the ttl. Ttls beyond `i64` millis never expire.
    pub fn is_fresh(&self, timestamp: i64, now: i64) -> bool {
        let age = now.saturating_sub(timestamp);
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        age < ttl_ms
    }
}

/// Typed get/set of timestamped values.
#[derive(Clone)]
pub struct TimedCache {
    store: Arc<dyn KeyValueStore>,
}

impl TimedCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Value and capture time. Undecodable entries count as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<(T, i64)> {
        let raw = self.store.get_item(key)?;
        match serde_json::from_str::<CacheEntry<T>>(&raw) {
            Ok(entry) => Some((entry.data, entry.timestamp)),
            Err(e) => {
                warn!("Discarding unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, data: &T, timestamp: i64) -> Result<()> {
        let blob = serde_json::to_string(&CacheEntry { data, timestamp })?;
        self.store.set_item(key, &blob)
    }

    pub fn remove(&self, key: &str) {
        self.store.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::store::MemoryStore;

    #[test]
    fn test_get_set_round_trip() {
        let cache = TimedCache::new(Arc::new(MemoryStore::new()));
        assert!(cache.get::<Vec<String>>("skills").is_none());

        cache
            .set("skills", &vec!["SQL".to_string()], 1_700_000_000_000)
            .unwrap();
        let (data, ts) = cache.get::<Vec<String>>("skills").unwrap();
        assert_eq!(data, vec!["SQL"]);
        assert_eq!(ts, 1_700_000_000_000);

        cache.remove("skills");
        assert!(cache.get::<Vec<String>>("skills").is_none());
    }

    #[test]
    fn test_blob_format() {
        let store = Arc::new(MemoryStore::new());
        let cache = TimedCache::new(store.clone());
        cache.set("k", &serde_json::json!({"a": 1}), 42).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&store.get_item("k").unwrap()).unwrap();
        assert_eq!(raw["data"]["a"], 1);
        assert_eq!(raw["timestamp"], 42);
    }

    #[test]
    fn test_corrupt_entry_is_miss() {
        let store = Arc::new(MemoryStore::new());
        store.set_item("k", "not json").unwrap();
        let cache = TimedCache::new(store);
        assert!(cache.get::<serde_json::Value>("k").is_none());
    }

    #[test]
    fn test_policy_expiry_window() {
        let policy = CachePolicy::new("portfolio_data_v1", Duration::from_secs(60));
        let clock = ManualClock::new(1_000_000);
        let written = clock.now_millis();

        clock.advance(Duration::from_secs(59));
        assert!(policy.is_fresh(written, clock.now_millis()));

        clock.advance(Duration::from_secs(1));
        assert!(!policy.is_fresh(written, clock.now_millis()));

        clock.advance(Duration::from_secs(1));
        assert!(!policy.is_fresh(written, clock.now_millis()));
    }

    #[test]
    fn test_policy_huge_ttl_stays_fresh() {
        let policy = CachePolicy::new("k", Duration::from_secs(9_223_372_036_854_776));
        assert!(policy.is_fresh(1_000, 2_000));

        let policy = CachePolicy::new("k", Duration::MAX);
        assert!(policy.is_fresh(0, 1_700_000_000_000));
    }

    #[test]
    fn test_policy_zero_ttl_never_fresh() {
        let policy = CachePolicy::new("k", Duration::ZERO);
        assert!(!policy.is_fresh(10, 10));
    }
}
