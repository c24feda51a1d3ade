//! Response envelopes returned by the HTTP API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entry::{Card, Idiom, Source, Word};

/// A batch of word cards together with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct WordBatch {
    pub data: Vec<Card<Word>>,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl WordBatch {
    pub fn external(data: Vec<Card<Word>>) -> Self {
        Self {
            data,
            source: Source::ExternalApi,
            warning: None,
        }
    }

    pub fn fallback(data: Vec<Card<Word>>, warning: Option<String>) -> Self {
        Self {
            data,
            source: Source::InternalDatabaseFallback,
            warning,
        }
    }
}

/// `/api/idioms` and `/api/idioms/refresh`.
#[derive(Debug, Clone, Serialize)]
pub struct IdiomsResponse {
    pub success: bool,
    pub data: Vec<Card<Idiom>>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IdiomsResponse {
    pub fn new(data: Vec<Card<Idiom>>) -> Self {
        Self {
            success: true,
            data,
            timestamp: Utc::now(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// `/api/words` and `/api/words/refresh`.
#[derive(Debug, Clone, Serialize)]
pub struct WordsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub batch: WordBatch,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WordsResponse {
    pub fn new(batch: WordBatch) -> Self {
        Self {
            success: true,
            batch,
            timestamp: Utc::now(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Word counts per tier.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AvailableWords {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub total: usize,
}

/// Payload of `/api/stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub cache_size: usize,
    pub max_cache_size: usize,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Hits over lookups since start, `0.0` before the first lookup.
    pub hit_rate: f64,
    pub available_words: AvailableWords,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: StatsData,
    pub timestamp: DateTime<Utc>,
}

impl StatsResponse {
    pub fn new(data: StatsData) -> Self {
        Self {
            success: true,
            data,
            timestamp: Utc::now(),
        }
    }
}

/// `POST /api/cache/clear`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            success: true,
            status: "healthy",
            timestamp: Utc::now(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
