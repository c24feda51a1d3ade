//! Cache-wrapped dictionary lookups.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::client::DictionaryClient;
use crate::cache::{CacheStats, WordCache};
use crate::types::entry::{Card, Word};
use crate::LexiResult;

/// Builds an id that stays unique across concurrent lookups.
fn lookup_id(prefix: &str) -> String {
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}",
        prefix,
        chrono::Utc::now().timestamp_millis(),
        &nonce[..9]
    )
}

/// A [`DictionaryClient`] in front of a [`WordCache`].
///
/// The cache lock is only held for the synchronous get/put, never across
/// the network call. Two concurrent misses on the same word may both hit
/// the network; the last one to finish wins the cache slot.
pub struct CachedDictionary {
    client: Arc<dyn DictionaryClient>,
    cache: Mutex<WordCache>,
}

impl CachedDictionary {
    pub fn new(client: Arc<dyn DictionaryClient>, cache: WordCache) -> Self {
        Self {
            client,
            cache: Mutex::new(cache),
        }
    }

    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    /// Returns `word` from the cache or, on a miss, from the client.
    ///
    /// Every call yields a fresh card id. Client errors propagate unchanged.
    pub async fn fetch_with_cache(&self, word: &str) -> LexiResult<Card<Word>> {
        let key = WordCache::cache_key(word);

        let cached = { self.cache.lock().await.get(&key) };
        if let Some(hit) = cached {
            tracing::debug!(word = %key, "Cache hit");
            return Ok(Card::new(lookup_id("cached"), hit));
        }

        let fetched = self.client.fetch_word(&key).await?;
        self.cache.lock().await.put(&key, fetched.clone());
        tracing::debug!(word = %key, "Fetched from dictionary and cached");

        Ok(Card::new(lookup_id("external-word"), fetched))
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
        tracing::info!("Word cache cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entry::Difficulty;
    use crate::LexiError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingClient {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl DictionaryClient for CountingClient {
        fn name(&self) -> &str {
            "counting"
        }

        async fn fetch_word(&self, word: &str) -> LexiResult<Word> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LexiError::Timeout(word.to_string()));
            }
            Ok(Word {
                english: word.to_string(),
                japanese: String::new(),
                part_of_speech: "noun".to_string(),
                pronunciation: None,
                definition: "test".to_string(),
                example_sentences: vec![],
                synonyms: vec![],
                antonyms: vec![],
                audio_url: None,
                difficulty: Difficulty::Easy,
            })
        }
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let client = CountingClient::new(false);
        let dict = CachedDictionary::new(client.clone(), WordCache::new(10));

        let first = dict.fetch_with_cache("Happy").await.unwrap();
        let second = dict.fetch_with_cache("happy").await.unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.entry, second.entry);
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("external-word-"));
        assert!(second.id.starts_with("cached-"));

        let stats = dict.stats().await;
        assert_eq!(stats.size, 1);
        assert_eq!(stats.hits, 1);
    }

    #[tokio::test]
    async fn test_errors_propagate_and_are_not_cached() {
        let client = CountingClient::new(true);
        let dict = CachedDictionary::new(client.clone(), WordCache::new(10));

        let err = dict.fetch_with_cache("happy").await.unwrap_err();
        assert!(matches!(err, LexiError::Timeout(_)));

        let _ = dict.fetch_with_cache("happy").await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
        assert_eq!(dict.stats().await.size, 0);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let client = CountingClient::new(false);
        let dict = CachedDictionary::new(client.clone(), WordCache::new(10));

        dict.fetch_with_cache("kind").await.unwrap();
        dict.clear_cache().await;
        dict.fetch_with_cache("kind").await.unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }
}
