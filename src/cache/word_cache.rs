//! LRU cache of normalized dictionary words.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;

use crate::types::entry::{natural_key, Word};

/// Capacity used when a zero capacity is requested.
pub const DEFAULT_CAPACITY: usize = 200;

/// Cache statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Current number of entries.
    pub size: usize,

    /// Maximum capacity.
    pub capacity: usize,

    /// Number of cache hits.
    pub hits: u64,

    /// Number of cache misses.
    pub misses: u64,
}

impl CacheStats {
    /// Calculates the hit rate.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Bounded word cache with least-recently-used eviction.
///
/// Both `get` and `put` count as a touch: the key touched longest ago is
/// always the next one evicted.
pub struct WordCache {
    cache: LruCache<String, Word>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl WordCache {
    /// Creates a new cache holding at most `capacity` words.
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(cap),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Normalizes a headword into a cache key.
    pub fn cache_key(word: &str) -> String {
        natural_key(word)
    }

    /// Looks up `key` and marks it as most recently used.
    pub fn get(&mut self, key: &str) -> Option<Word> {
        match self.cache.get(&Self::cache_key(key)) {
            Some(word) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(word.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Inserts or refreshes `key`, evicting the least recently used entry
    /// when the cache is full.
    pub fn put(&mut self, key: &str, word: Word) {
        if let Some((evicted, _)) = self.cache.push(Self::cache_key(key), word) {
            if evicted != Self::cache_key(key) {
                tracing::debug!(evicted = %evicted, "Evicted least recently used word");
            }
        }
    }

    /// Checks for `key` without touching its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains(&Self::cache_key(key))
    }

    /// Clears the whole cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for WordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCache")
            .field("size", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}
