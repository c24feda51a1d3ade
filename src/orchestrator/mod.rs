//! Fallback orchestration over the dictionary and the static store.
//!
//! [`Deck`] wires the pieces together from a [`Config`]:
//!
//! - [`WordService`] - dictionary lookups with a static fallback
//! - [`IdiomService`] - static idiom samples and refresh variations

mod idioms;
mod words;

pub use idioms::{IdiomService, Variation, VariationField, REFRESH_POOL, VARIATIONS};
pub use words::{WordService, EXTERNAL_DISABLED_WARNING, EXTERNAL_UNAVAILABLE_WARNING};

use std::sync::Arc;

use crate::cache::WordCache;
use crate::dictionary::{CachedDictionary, DictionaryClient, FreeDictionaryClient};
use crate::store::{Sampler, StaticStore};
use crate::types::config::Config;
use crate::types::responses::StatsData;
use crate::LexiResult;

/// Everything a request handler needs.
pub struct Deck {
    pub words: WordService,
    pub idioms: IdiomService,
}

impl Deck {
    /// Builds the deck with the Free Dictionary client from `config`.
    pub fn from_config(config: &Config) -> LexiResult<Self> {
        let store = Arc::new(StaticStore::builtin());
        let client = FreeDictionaryClient::from_config(
            &config.dictionary,
            store.word_lists().clone(),
        )?;
        Ok(Self::with_client(config, store, Arc::new(client)))
    }

    /// Builds the deck around any dictionary client.
    pub fn with_client(
        config: &Config,
        store: Arc<StaticStore>,
        client: Arc<dyn DictionaryClient>,
    ) -> Self {
        let sampler = Arc::new(Sampler::from_seed(config.sampling.seed));
        let dictionary = Arc::new(CachedDictionary::new(
            client,
            WordCache::new(config.cache.capacity),
        ));

        tracing::debug!(
            client = dictionary.client_name(),
            enabled = config.dictionary.enabled,
            cache_capacity = config.cache.capacity,
            idioms = store.idioms().len(),
            "Deck initialized"
        );

        Self {
            words: WordService::new(
                store.clone(),
                sampler.clone(),
                dictionary,
                config.dictionary.enabled,
            ),
            idioms: IdiomService::new(store, sampler),
        }
    }

    /// Cache and pool figures for `/api/stats`.
    pub async fn stats(&self) -> StatsData {
        let cache = self.words.cache_stats().await;
        StatsData {
            cache_size: cache.size,
            max_cache_size: cache.capacity,
            cache_hits: cache.hits,
            cache_misses: cache.misses,
            hit_rate: cache.hit_rate(),
            available_words: self.words.available_words(),
        }
    }
}
