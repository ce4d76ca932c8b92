//! Short-lived per-key cache for sub-resource listings.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Duration, Utc};

/// How long a cached entry stays valid, in seconds.
pub const DEFAULT_TTL_SECS: i64 = 30;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

/// Time-bounded map. Entries older than the TTL are treated as missing and
/// evicted on the next read.
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        self.get_at(key, Utc::now())
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Utc::now());
    }

    /// Look up `key` as of `now`.
    pub fn get_at(&mut self, key: &K, now: DateTime<Utc>) -> Option<V> {
        let entry = self.entries.get(key)?;
        if now - entry.stored_at > self.ttl {
            self.entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    pub fn insert_at(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            Entry {
                value,
                stored_at: now,
            },
        );
    }

    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TTL_SECS))
    }
}
