//! [`TtlCache`] implementation.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use lru::LruCache;

/// A cached value with its expiry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedEntry<V> {
    /// Cached value.
    pub value: V,
    /// Instant after which the entry is stale (`None` never expires).
    pub expires_at: Option<Instant>,
}

impl<V> CachedEntry<V> {
    /// Create an entry stored at `now` that lives for `ttl`.
    ///
    /// A `ttl` too large to represent as an [`Instant`] never expires.
    #[must_use]
    pub fn new(value: V, ttl: Option<Duration>, now: Instant) -> Self {
        Self {
            value,
            expires_at: ttl.and_then(|ttl| now.checked_add(ttl)),
        }
    }

    /// Whether the entry is stale at `now`.
    ///
    /// An entry is still fresh at exactly its expiry instant.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now > at)
    }
}

/// Bounded, time-limited LRU cache.
///
/// Entries are owned by the cache; lookups return clones. Wrap large values
/// in `Arc` to keep lookups cheap.
///
/// Concurrent `set` calls for the same key race; the last one wins.
pub struct TtlCache<K, V> {
    entries: Mutex<LruCache<K, CachedEntry<V>>>,
    default_ttl: Option<Duration>,
    enabled: bool,
}

impl<K: Hash + Eq, V: Clone> TtlCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// `default_ttl` applies to [`insert`](Self::insert); `None` keeps
    /// entries until they are evicted.
    #[must_use]
    pub fn new(capacity: NonZeroUsize, default_ttl: Option<Duration>) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            default_ttl,
            enabled: true,
        }
    }

    /// Create a cache that never stores anything.
    ///
    /// Every `get` misses and every `set` is discarded. Use when caching is
    /// disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            entries: Mutex::new(LruCache::new(NonZeroUsize::MIN)),
            default_ttl: None,
            enabled: false,
        }
    }

    /// Whether the cache stores entries at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// TTL used by [`insert`](Self::insert).
    #[must_use]
    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    /// Number of entries currently held, including ones that have expired
    /// but not yet been looked up.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a value, marking it as most recently used.
    ///
    /// Returns `None` on a miss or when the entry has expired.
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Look up a value as of `now`.
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        if !self.enabled {
            return None;
        }

        let mut entries = self.lock();
        let expired = match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            tracing::debug!("dropping expired cache entry");
            entries.pop(key);
        }
        None
    }

    /// Store a value with an explicit TTL, replacing any previous entry.
    ///
    /// Evicts the least-recently-used entry when the cache is full.
    pub fn set(&self, key: K, value: V, ttl: Option<Duration>) {
        self.set_at(key, value, ttl, Instant::now());
    }

    /// Store a value as of `now`.
    pub fn set_at(&self, key: K, value: V, ttl: Option<Duration>, now: Instant) {
        if !self.enabled {
            return;
        }

        let mut entries = self.lock();
        let full = entries.len() == entries.cap().get() && !entries.contains(&key);
        entries.put(key, CachedEntry::new(value, ttl, now));
        if full {
            tracing::debug!("cache full, evicted least recently used entry");
        }
    }

    /// Store a value with the cache's default TTL.
    pub fn insert(&self, key: K, value: V) {
        self.set(key, value, self.default_ttl);
    }

    /// Remove an entry, returning its value if it was present and fresh.
    pub fn remove(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        self.lock()
            .pop(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value)
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, CachedEntry<V>>> {
        // Entries are replaced whole, so a panic mid-operation cannot leave
        // a half-written value behind.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
