//! LRU cache for dictionary lookups.
//!
//! Words fetched from the external dictionary are kept here, keyed by
//! their lower-cased headword, so repeated batches avoid the network.

mod word_cache;

pub use word_cache::{CacheStats, WordCache, DEFAULT_CAPACITY};
