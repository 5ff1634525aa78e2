//! Token store implementations
//!
//! - [`MemoryTokenStore`]: map guarded by a `parking_lot` mutex, expiry
//!   measured with an injectable [`Clock`]
//! - [`MokaTokenStore`]: `moka` cache with a per-entry expiry policy

use std::collections::HashMap;
use std::time::{Duration, Instant};

use moka::sync::Cache;
use moka::Expiry;
use parking_lot::Mutex;
use tracing::debug;

use super::traits::TokenStore;
use crate::time::{Clock, SystemClock};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    /// `None` when the TTL reaches past what `Instant` can represent
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

/// In-memory token store driven by a [`Clock`]
///
/// Expired entries are evicted lazily on `get`.
pub struct MemoryTokenStore<C: Clock = SystemClock> {
    entries: Mutex<HashMap<String, Entry>>,
    clock: C,
}

impl MemoryTokenStore<SystemClock> {
    /// Create a store backed by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryTokenStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryTokenStore<C> {
    /// Create a store with a custom clock (for testing)
    pub fn with_clock(clock: C) -> Self {
        Self { entries: Mutex::new(HashMap::new()), clock }
    }

    /// Number of entries currently held, including not-yet-evicted expired ones
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<C: Clock> TokenStore for MemoryTokenStore<C> {
    fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Some(entry.value.clone()),
            Some(_) => {
                debug!(key, "token store entry expired");
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: &str, value: String, ttl: Duration) {
        let mut entries = self.entries.lock();
        if ttl.is_zero() {
            entries.remove(key);
            return;
        }

        let expires_at = self.clock.now().checked_add(ttl);
        entries.insert(key.to_string(), Entry { value, expires_at });
    }
}

/// Default capacity for [`MokaTokenStore`]; one entry is expected
pub const DEFAULT_MOKA_CAPACITY: u64 = 16;

#[derive(Debug, Clone)]
struct StoredToken {
    value: String,
    ttl: Duration,
}

struct PerEntryTtl;

impl Expiry<String, StoredToken> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredToken,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredToken,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Token store backed by a `moka` cache
///
/// Each entry expires after the TTL given to `put`, independent of other
/// entries.
pub struct MokaTokenStore {
    cache: Cache<String, StoredToken>,
}

impl MokaTokenStore {
    /// Create a store with [`DEFAULT_MOKA_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MOKA_CAPACITY)
    }

    /// Create a store holding at most `max_capacity` entries
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_capacity).expire_after(PerEntryTtl).build();
        Self { cache }
    }
}

impl Default for MokaTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for MokaTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key).map(|stored| stored.value)
    }

    fn put(&self, key: &str, value: String, ttl: Duration) {
        if ttl.is_zero() {
            self.cache.invalidate(key);
            return;
        }
        self.cache.insert(key.to_string(), StoredToken { value, ttl });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::MockClock;

    #[test]
    fn memory_store_serves_until_ttl_elapses() {
        let clock = MockClock::new();
        let store = MemoryTokenStore::with_clock(clock.clone());

        store.put("k", "v".into(), Duration::from_secs(10));
        clock.advance(Duration::from_secs(9));
        assert_eq!(store.get("k").as_deref(), Some("v"));

        clock.advance(Duration::from_secs(1));
        assert_eq!(store.get("k"), None);
        assert!(store.is_empty(), "expired entry should be evicted on read");
    }

    #[test]
    fn memory_store_keeps_entry_whose_ttl_exceeds_instant_range() {
        let clock = MockClock::new();
        let store = MemoryTokenStore::with_clock(clock.clone());

        store.put("k", "v".into(), Duration::MAX);
        clock.advance(Duration::from_secs(10 * 365 * 24 * 3600));

        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn memory_store_zero_ttl_removes_entry() {
        let store = MemoryTokenStore::new();
        store.put("k", "v".into(), Duration::from_secs(60));
        store.put("k", "w".into(), Duration::ZERO);
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn memory_store_put_overwrites() {
        let clock = MockClock::new();
        let store = MemoryTokenStore::with_clock(clock.clone());

        store.put("k", "old".into(), Duration::from_secs(5));
        store.put("k", "new".into(), Duration::from_secs(50));
        clock.advance(Duration::from_secs(20));

        assert_eq!(store.get("k").as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_store_accepts_shared_clock() {
        let clock = Arc::new(MockClock::new());
        let store = MemoryTokenStore::with_clock(clock.clone());
        store.put("k", "v".into(), Duration::from_secs(1));
        clock.advance(Duration::from_secs(2));
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn moka_store_round_trips_and_invalidates() {
        let store = MokaTokenStore::new();
        assert_eq!(store.get("k"), None);

        store.put("k", "v".into(), Duration::from_secs(3600));
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.put("k", "v2".into(), Duration::from_secs(3600));
        assert_eq!(store.get("k").as_deref(), Some("v2"));

        store.put("k", "ignored".into(), Duration::ZERO);
        assert_eq!(store.get("k"), None);
    }
}
