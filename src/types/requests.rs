//! Query parameters accepted by the HTTP API.
//!
//! Every field is kept as raw text so that malformed values degrade to
//! defaults instead of rejecting the request.

use serde::{Deserialize, Serialize};

use super::entry::DifficultyFilter;

/// Number of cards returned when `count` is absent or not a number.
pub const DEFAULT_COUNT: usize = 10;

/// Query of `/api/idioms`, `/api/idioms/refresh`, `/api/words` and `/api/words/refresh`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardQuery {
    #[serde(default)]
    pub count: Option<String>,

    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub external: Option<String>,
}

impl CardQuery {
    /// Requested count; absent or non-numeric falls back to [`DEFAULT_COUNT`].
    pub fn count(&self) -> usize {
        self.count
            .as_deref()
            .and_then(|c| c.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_COUNT)
    }

    pub fn difficulty(&self) -> DifficultyFilter {
        DifficultyFilter::parse(self.difficulty.as_deref())
    }

    /// Whether the external dictionary should be consulted (default true).
    pub fn use_external(&self) -> bool {
        match self.external.as_deref().map(|v| v.trim().to_lowercase()) {
            Some(v) => !matches!(v.as_str(), "false" | "0" | "no" | "off"),
            None => true,
        }
    }
}
