//! Static word and idiom store.
//!
//! Everything here is loaded once at startup and never mutated. The pools
//! are de-duplicated on their natural key (trimmed, lower-cased English)
//! while loading, so samplers never have to worry about duplicates.

pub mod catalog;
mod sampler;

use std::collections::HashSet;

pub use sampler::{balanced_split, card_id, Sampler};

use crate::types::entry::{natural_key, Difficulty, Idiom, LexicalEntry, Word};
use crate::types::responses::AvailableWords;

/// Candidate headwords for dictionary lookups, grouped by tier.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl WordLists {
    pub fn new(easy: &[&str], medium: &[&str], hard: &[&str]) -> Self {
        Self {
            easy: dedup_names(easy),
            medium: dedup_names(medium),
            hard: dedup_names(hard),
        }
    }

    /// The built-in lists.
    pub fn builtin() -> Self {
        Self::new(catalog::EASY_WORDS, catalog::MEDIUM_WORDS, catalog::HARD_WORDS)
    }

    pub fn tier(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// First tier (easiest first) whose list contains `word`.
    pub fn tier_of(&self, word: &str) -> Option<Difficulty> {
        let key = natural_key(word);
        Difficulty::ALL
            .into_iter()
            .find(|d| self.tier(*d).iter().any(|w| *w == key))
    }

    pub fn counts(&self) -> AvailableWords {
        AvailableWords {
            easy: self.easy.len(),
            medium: self.medium.len(),
            hard: self.hard.len(),
            total: self.easy.len() + self.medium.len() + self.hard.len(),
        }
    }
}

fn dedup_names(names: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|n| natural_key(n))
        .filter(|n| !n.is_empty() && seen.insert(n.clone()))
        .collect()
}

/// Keeps the first entry for each natural key, preserving order.
pub fn dedup_entries<T: LexicalEntry>(entries: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.natural_key()))
        .collect()
}

/// The immutable curated database.
#[derive(Debug, Clone)]
pub struct StaticStore {
    idioms: Vec<Idiom>,
    fallback_words: Vec<Word>,
    word_lists: WordLists,
}

impl StaticStore {
    pub fn new(idioms: Vec<Idiom>, fallback_words: Vec<Word>, word_lists: WordLists) -> Self {
        let store = Self {
            idioms: dedup_entries(idioms),
            fallback_words: dedup_entries(fallback_words),
            word_lists,
        };

        tracing::debug!(
            idioms = store.idioms.len(),
            fallback_words = store.fallback_words.len(),
            candidate_words = store.word_lists.counts().total,
            "Static store loaded"
        );

        store
    }

    /// Store backed by the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(
            catalog::idioms(),
            catalog::fallback_words(),
            WordLists::builtin(),
        )
    }

    pub fn idioms(&self) -> &[Idiom] {
        &self.idioms
    }

    pub fn fallback_words(&self) -> &[Word] {
        &self.fallback_words
    }

    pub fn word_lists(&self) -> &WordLists {
        &self.word_lists
    }
}

impl Default for StaticStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_is_populated() {
        let store = StaticStore::builtin();
        assert!(store.idioms().len() >= 30);
        assert!(!store.fallback_words().is_empty());

        for d in Difficulty::ALL {
            assert!(store.idioms().iter().any(|i| i.difficulty == d));
            assert!(store.fallback_words().iter().any(|w| w.difficulty == d));
            assert!(!store.word_lists().tier(d).is_empty());
        }
    }

    #[test]
    fn test_builtin_pools_have_unique_keys() {
        let store = StaticStore::builtin();

        let keys: HashSet<_> = store.idioms().iter().map(|i| i.natural_key()).collect();
        assert_eq!(keys.len(), store.idioms().len());

        let keys: HashSet<_> = store.fallback_words().iter().map(|w| w.natural_key()).collect();
        assert_eq!(keys.len(), store.fallback_words().len());
    }

    #[test]
    fn test_dedup_is_case_insensitive() {
        let idioms = vec![
            Idiom::new("Break the ice", "a", "b", "c", Difficulty::Easy),
            Idiom::new("  break THE ice ", "x", "y", "z", Difficulty::Hard),
            Idiom::new("Spill the beans", "a", "b", "c", Difficulty::Medium),
        ];
        let store = StaticStore::new(idioms, vec![], WordLists::default());

        assert_eq!(store.idioms().len(), 2);
        assert_eq!(store.idioms()[0].japanese, "a");
    }

    #[test]
    fn test_word_lists_dedup_and_lookup() {
        let lists = WordLists::new(&["Happy", "happy", "kind"], &["analyze"], &["paradigm"]);

        assert_eq!(lists.tier(Difficulty::Easy), ["happy", "kind"]);
        assert_eq!(lists.tier_of("HAPPY"), Some(Difficulty::Easy));
        assert_eq!(lists.tier_of("paradigm"), Some(Difficulty::Hard));
        assert_eq!(lists.tier_of("zebra"), None);

        let counts = lists.counts();
        assert_eq!((counts.easy, counts.medium, counts.hard, counts.total), (2, 1, 1, 4));
    }

    #[test]
    fn test_builtin_word_list_counts() {
        let counts = WordLists::builtin().counts();
        assert_eq!(counts.easy, 32);
        assert_eq!(counts.medium, 32);
        assert_eq!(counts.hard, 30);
        assert_eq!(counts.total, 94);
    }
}
