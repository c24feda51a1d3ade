//! External dictionary integration.
//!
//! - [`DictionaryClient`] - trait for anything that can define a word
//! - [`FreeDictionaryClient`] - HTTP client for the Free Dictionary API
//! - [`CachedDictionary`] - LRU-cached lookups on top of a client
//! - [`classify_difficulty`] - tier assignment for fetched words

mod cached;
mod client;
mod difficulty;
pub mod payload;

pub use cached::CachedDictionary;
pub use client::{DictionaryClient, FreeDictionaryClient, MAX_BODY_BYTES};
pub use difficulty::{classify_by_length, classify_difficulty};
