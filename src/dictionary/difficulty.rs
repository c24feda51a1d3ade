//! Difficulty classification for externally fetched words.

use crate::store::WordLists;
use crate::types::entry::{natural_key, Difficulty};

/// Classifies `word`: tier-list membership first, then surface length
/// (≤5 easy, ≤8 medium, otherwise hard).
pub fn classify_difficulty(word: &str, lists: &WordLists) -> Difficulty {
    lists
        .tier_of(word)
        .unwrap_or_else(|| classify_by_length(word))
}

/// Length-only classification, counted in characters.
pub fn classify_by_length(word: &str) -> Difficulty {
    match natural_key(word).chars().count() {
        0..=5 => Difficulty::Easy,
        6..=8 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}
