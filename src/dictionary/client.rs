//! Dictionary clients.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::payload::{normalize, parse_body};
use crate::store::WordLists;
use crate::types::config::DictionaryConfig;
use crate::types::entry::{natural_key, Word};
use crate::{LexiError, LexiResult};

/// Largest response body read from the dictionary. Real entries are a few
/// kilobytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Source of word definitions.
///
/// Implementations return a fully normalized [`Word`] or one of
/// [`LexiError::Network`], [`LexiError::Timeout`] and
/// [`LexiError::InvalidResponse`]. They never cache.
#[async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Returns the client name.
    fn name(&self) -> &str;

    /// Looks up a single word.
    async fn fetch_word(&self, word: &str) -> LexiResult<Word>;
}

/// Client for the Free Dictionary API (`dictionaryapi.dev`) and anything
/// that speaks the same JSON.
pub struct FreeDictionaryClient {
    http: Client,
    base_url: Url,
    timeout: Duration,
    word_lists: WordLists,
}

impl FreeDictionaryClient {
    /// Creates a client from the `[dictionary]` configuration.
    pub fn from_config(config: &DictionaryConfig, word_lists: WordLists) -> LexiResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            LexiError::config(format!("invalid dictionary base_url '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(LexiError::config(format!(
                "dictionary base_url '{}' cannot take a path",
                config.base_url
            )));
        }

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LexiError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout(),
            word_lists,
        })
    }

    /// Sets the per-request deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base_url}/{word}` with the word lower-cased and percent-encoded.
    pub fn word_url(&self, word: &str) -> LexiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LexiError::config("dictionary base_url cannot take a path"))?
            .pop_if_empty()
            .push(&natural_key(word));
        Ok(url)
    }

    async fn request(&self, word: &str, url: Url) -> LexiResult<Word> {
        let mut response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(word, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LexiError::invalid_response(word, format!("HTTP {}", status)));
        }

        if response
            .content_length()
            .is_some_and(|len| len > MAX_BODY_BYTES as u64)
        {
            return Err(oversized_body(word));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| transport_error(word, e))?
        {
            if body.len() + chunk.len() > MAX_BODY_BYTES {
                return Err(oversized_body(word));
            }
            body.extend_from_slice(&chunk);
        }

        let entry = parse_body(word, &body)?;
        Ok(normalize(entry, word, &self.word_lists))
    }
}

fn oversized_body(word: &str) -> LexiError {
    LexiError::invalid_response(word, format!("body exceeds {} bytes", MAX_BODY_BYTES))
}

fn transport_error(word: &str, error: reqwest::Error) -> LexiError {
    if error.is_timeout() {
        LexiError::Timeout(word.to_string())
    } else {
        LexiError::Network(word.to_string(), error.to_string())
    }
}

#[async_trait]
impl DictionaryClient for FreeDictionaryClient {
    fn name(&self) -> &str {
        "free-dictionary"
    }

    async fn fetch_word(&self, word: &str) -> LexiResult<Word> {
        let url = self.word_url(word)?;
        tracing::debug!(word, url = %url, "Fetching word from dictionary");

        match tokio::time::timeout(self.timeout, self.request(word, url)).await {
            Ok(result) => result,
            Err(_) => Err(LexiError::Timeout(word.to_string())),
        }
    }
}
