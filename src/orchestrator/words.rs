//! Word batches: dictionary first, static database as the fallback.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;

use crate::cache::CacheStats;
use crate::dictionary::CachedDictionary;
use crate::store::{Sampler, StaticStore};
use crate::types::entry::{Card, DifficultyFilter, LexicalEntry, Word};
use crate::types::responses::{AvailableWords, WordBatch};
use crate::{LexiError, LexiResult};

/// Warning attached when the dictionary was tried and produced nothing.
pub const EXTERNAL_UNAVAILABLE_WARNING: &str =
    "External dictionary API is unavailable; showing words from the internal database instead.";

/// Warning attached when the dictionary is switched off in the configuration.
pub const EXTERNAL_DISABLED_WARNING: &str =
    "External dictionary API is disabled; showing words from the internal database instead.";

/// Card id prefix for static fallback words.
const FALLBACK_PREFIX: &str = "fallback-word";

/// Resolves word batches.
pub struct WordService {
    store: Arc<StaticStore>,
    sampler: Arc<Sampler>,
    dictionary: Arc<CachedDictionary>,
    external_enabled: bool,
}

impl WordService {
    pub fn new(
        store: Arc<StaticStore>,
        sampler: Arc<Sampler>,
        dictionary: Arc<CachedDictionary>,
        external_enabled: bool,
    ) -> Self {
        Self {
            store,
            sampler,
            dictionary,
            external_enabled,
        }
    }

    /// Returns up to `count` words.
    ///
    /// With `use_external` the dictionary is consulted first. Any batch it
    /// cannot fill with at least one word is replaced by static data tagged
    /// `internal-database-fallback` with a warning.
    pub async fn get_words(
        &self,
        count: usize,
        filter: DifficultyFilter,
        use_external: bool,
    ) -> LexiResult<WordBatch> {
        if !use_external || count == 0 {
            return Ok(self.static_words(count, filter, None));
        }

        if !self.external_enabled {
            return Ok(self.static_words(
                count,
                filter,
                Some(EXTERNAL_DISABLED_WARNING.to_string()),
            ));
        }

        match self.external_words(count, filter).await {
            Ok(cards) => {
                tracing::info!(
                    requested = count,
                    resolved = cards.len(),
                    difficulty = %filter,
                    "Words resolved from dictionary"
                );
                Ok(WordBatch::external(cards))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dictionary produced no words, using static fallback");
                Ok(self.static_words(
                    count,
                    filter,
                    Some(EXTERNAL_UNAVAILABLE_WARNING.to_string()),
                ))
            }
        }
    }

    /// Looks up every candidate concurrently. A failed lookup only drops
    /// that word; the batch fails when nothing resolved.
    async fn external_words(
        &self,
        count: usize,
        filter: DifficultyFilter,
    ) -> LexiResult<Vec<Card<Word>>> {
        let names = self
            .sampler
            .candidate_names(self.store.word_lists(), count, filter);
        if names.is_empty() {
            return Err(LexiError::EmptyResult(format!(
                "no candidate words for difficulty '{}'",
                filter
            )));
        }

        tracing::debug!(words = ?names, "Looking up words");

        let lookups = names.iter().map(|name| async move {
            (name, self.dictionary.fetch_with_cache(name).await)
        });

        let mut seen = HashSet::new();
        let cards: Vec<Card<Word>> = join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(name, result)| match result {
                Ok(card) => Some(card),
                Err(e) if e.is_fetch_error() => {
                    tracing::warn!(word = %name, error = %e, "Word lookup failed");
                    None
                }
                Err(e) => {
                    tracing::error!(word = %name, error = %e, "Unexpected error during word lookup");
                    None
                }
            })
            .filter(|card| seen.insert(card.entry.natural_key()))
            .collect();

        if cards.is_empty() {
            return Err(LexiError::EmptyResult(format!(
                "all {} dictionary lookups failed",
                names.len()
            )));
        }

        Ok(cards)
    }

    fn static_words(
        &self,
        count: usize,
        filter: DifficultyFilter,
        warning: Option<String>,
    ) -> WordBatch {
        let cards = self
            .sampler
            .sample(self.store.fallback_words(), count, filter, FALLBACK_PREFIX);
        WordBatch::fallback(cards, warning)
    }

    /// Sizes of the candidate word lists.
    pub fn available_words(&self) -> AvailableWords {
        self.store.word_lists().counts()
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.dictionary.stats().await
    }

    /// Empties the word cache. Hit and miss counters keep running.
    pub async fn clear_cache(&self) {
        self.dictionary.clear_cache().await;
    }

    pub fn external_enabled(&self) -> bool {
        self.external_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::WordCache;
    use crate::dictionary::{classify_difficulty, DictionaryClient};
    use crate::store::WordLists;
    use crate::types::entry::{Difficulty, Source};
    use async_trait::async_trait;
    use std::collections::HashSet;

    /// Resolves every word except those listed in `missing`.
    struct StubClient {
        missing: HashSet<String>,
        fail_all: bool,
    }

    impl StubClient {
        fn healthy() -> Arc<Self> {
            Arc::new(Self {
                missing: HashSet::new(),
                fail_all: false,
            })
        }

        fn down() -> Arc<Self> {
            Arc::new(Self {
                missing: HashSet::new(),
                fail_all: true,
            })
        }

        fn missing(words: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                missing: words.iter().map(|w| w.to_string()).collect(),
                fail_all: false,
            })
        }
    }

    #[async_trait]
    impl DictionaryClient for StubClient {
        fn name(&self) -> &str {
            "stub"
        }

        async fn fetch_word(&self, word: &str) -> LexiResult<Word> {
            if self.fail_all {
                return Err(LexiError::Timeout(word.to_string()));
            }
            if self.missing.contains(word) {
                return Err(LexiError::invalid_response(word, "HTTP 404 Not Found"));
            }
            Ok(Word {
                english: word.to_string(),
                japanese: String::new(),
                part_of_speech: "noun".to_string(),
                pronunciation: None,
                definition: format!("definition of {}", word),
                example_sentences: vec![],
                synonyms: vec![],
                antonyms: vec![],
                audio_url: None,
                difficulty: classify_difficulty(word, &WordLists::builtin()),
            })
        }
    }

    fn service(client: Arc<dyn DictionaryClient>, enabled: bool) -> WordService {
        WordService::new(
            Arc::new(StaticStore::builtin()),
            Arc::new(Sampler::seeded(11)),
            Arc::new(CachedDictionary::new(client, WordCache::new(50))),
            enabled,
        )
    }

    #[tokio::test]
    async fn test_external_words_with_balanced_mix() {
        let svc = service(StubClient::healthy(), true);
        let batch = svc.get_words(10, DifficultyFilter::All, true).await.unwrap();

        assert_eq!(batch.source, Source::ExternalApi);
        assert!(batch.warning.is_none());
        assert_eq!(batch.data.len(), 10);
        assert!(batch.data.iter().all(|c| c.id.starts_with("external-word-")));

        let hard = batch
            .data
            .iter()
            .filter(|c| c.entry.difficulty == Difficulty::Hard)
            .count();
        assert_eq!(hard, 2);
    }

    #[tokio::test]
    async fn test_external_words_single_tier() {
        let svc = service(StubClient::healthy(), true);
        let batch = svc
            .get_words(5, DifficultyFilter::Only(Difficulty::Medium), true)
            .await
            .unwrap();

        assert_eq!(batch.data.len(), 5);
        assert!(batch.data.iter().all(|c| c.entry.difficulty == Difficulty::Medium));
    }

    #[tokio::test]
    async fn test_partial_failures_are_dropped() {
        let easy = WordLists::builtin().tier(Difficulty::Easy).to_vec();
        let missing: Vec<&str> = easy.iter().take(10).map(String::as_str).collect();
        let svc = service(StubClient::missing(&missing), true);

        let batch = svc
            .get_words(32, DifficultyFilter::Only(Difficulty::Easy), true)
            .await
            .unwrap();

        assert_eq!(batch.source, Source::ExternalApi);
        assert_eq!(batch.data.len(), easy.len() - 10);
        assert!(batch.data.iter().all(|c| !missing.contains(&c.entry.english.as_str())));
    }

    #[tokio::test]
    async fn test_all_failures_fall_back_with_warning() {
        let svc = service(StubClient::down(), true);
        let batch = svc.get_words(5, DifficultyFilter::All, true).await.unwrap();

        assert_eq!(batch.source, Source::InternalDatabaseFallback);
        assert_eq!(batch.warning.as_deref(), Some(EXTERNAL_UNAVAILABLE_WARNING));
        assert_eq!(batch.data.len(), 5);
        assert!(batch.data.iter().all(|c| c.id.starts_with("fallback-word-")));
    }

    #[tokio::test]
    async fn test_external_opt_out_skips_dictionary() {
        let svc = service(StubClient::down(), true);
        let batch = svc.get_words(4, DifficultyFilter::All, false).await.unwrap();

        assert_eq!(batch.source, Source::InternalDatabaseFallback);
        assert!(batch.warning.is_none());
        assert_eq!(batch.data.len(), 4);
        assert_eq!(svc.cache_stats().await.misses, 0);
    }

    #[tokio::test]
    async fn test_disabled_dictionary_warns() {
        let svc = service(StubClient::healthy(), false);
        let batch = svc.get_words(3, DifficultyFilter::All, true).await.unwrap();

        assert_eq!(batch.source, Source::InternalDatabaseFallback);
        assert_eq!(batch.warning.as_deref(), Some(EXTERNAL_DISABLED_WARNING));
        assert!(!svc.external_enabled());
    }

    #[tokio::test]
    async fn test_repeat_requests_hit_cache() {
        let svc = service(StubClient::healthy(), true);
        let filter = DifficultyFilter::Only(Difficulty::Hard);

        svc.get_words(30, filter, true).await.unwrap();
        let batch = svc.get_words(30, filter, true).await.unwrap();

        assert!(batch.data.iter().all(|c| c.id.starts_with("cached-")));
        let stats = svc.cache_stats().await;
        assert_eq!(stats.size, 30);
        assert_eq!(stats.hits, 30);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_new_lookups() {
        let svc = service(StubClient::healthy(), true);
        let filter = DifficultyFilter::Only(Difficulty::Easy);

        svc.get_words(3, filter, true).await.unwrap();
        assert_eq!(svc.cache_stats().await.size, 3);

        svc.clear_cache().await;
        let stats = svc.cache_stats().await;
        assert_eq!(stats.size, 0);
        assert_eq!(stats.misses, 3);

        let batch = svc.get_words(32, filter, true).await.unwrap();
        assert!(batch.data.iter().all(|c| c.id.starts_with("external-word-")));
    }

    #[tokio::test]
    async fn test_zero_count_is_empty() {
        let svc = service(StubClient::healthy(), true);
        let batch = svc.get_words(0, DifficultyFilter::All, true).await.unwrap();
        assert!(batch.data.is_empty());
    }

    #[test]
    fn test_available_words() {
        let svc = service(StubClient::healthy(), true);
        let counts = svc.available_words();
        assert_eq!(counts.total, counts.easy + counts.medium + counts.hard);
    }
}
