//! Difficulty-aware random sampling.

use std::collections::HashSet;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::WordLists;
use crate::types::entry::{natural_key, Card, Difficulty, DifficultyFilter, LexicalEntry};

/// Builds a per-response card id: `<prefix>-<unix millis>-<index>`.
pub fn card_id(prefix: &str, index: usize) -> String {
    format!("{}-{}-{}", prefix, chrono::Utc::now().timestamp_millis(), index)
}

/// Splits `count` into (easy, medium, hard) for a mixed batch.
///
/// Easy and medium get `ceil(40%)` each, hard takes the remainder. The
/// groups are clamped so their sum never exceeds `count`. Safe for any
/// `count`, including `usize::MAX`.
pub fn balanced_split(count: usize) -> (usize, usize, usize) {
    let share = count / 5 * 2 + (count % 5 * 2).div_ceil(5);
    let easy = share.min(count);
    let medium = share.min(count - easy);
    let hard = count - easy - medium;
    (easy, medium, hard)
}

/// Random sampler with an injectable, seedable generator.
pub struct Sampler {
    rng: Mutex<StdRng>,
}

impl Sampler {
    /// Sampler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sampler.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seeded when a seed is configured, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_else(Self::from_entropy)
    }

    /// Draws up to `count` distinct entries from `pool`.
    ///
    /// When `filter` leaves nothing, the unfiltered pool is used instead.
    pub fn sample<T: LexicalEntry>(
        &self,
        pool: &[T],
        count: usize,
        filter: DifficultyFilter,
        prefix: &str,
    ) -> Vec<Card<T>> {
        let mut candidates: Vec<&T> = pool
            .iter()
            .filter(|e| filter.matches(e.difficulty()))
            .collect();
        if candidates.is_empty() {
            candidates = pool.iter().collect();
        }

        let take = count.min(candidates.len());
        let chosen = {
            let mut rng = self.rng.lock();
            let (chosen, _) = candidates.partial_shuffle(&mut *rng, take);
            chosen.to_vec()
        };

        chosen
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Card::new(card_id(prefix, i), entry.clone()))
            .collect()
    }

    /// Up to `count` distinct names from `names`, in random order.
    pub fn pick_names(&self, names: &[String], count: usize) -> Vec<String> {
        let mut names: Vec<&String> = names.iter().collect();
        let take = count.min(names.len());
        let mut rng = self.rng.lock();
        let (chosen, _) = names.partial_shuffle(&mut *rng, take);
        chosen.iter().map(|n| n.to_string()).collect()
    }

    /// Headwords for one tier, or a balanced mix across tiers.
    pub fn candidate_names(
        &self,
        lists: &WordLists,
        count: usize,
        filter: DifficultyFilter,
    ) -> Vec<String> {
        // No batch can hold more names than the lists do.
        let count = count.min(lists.counts().total);
        match filter {
            DifficultyFilter::Only(d) => self.pick_names(lists.tier(d), count),
            DifficultyFilter::All => self.balanced_names(lists, count),
        }
    }

    /// Mixed-difficulty headwords, see [`balanced_split`].
    ///
    /// Each tier is sampled on its own, then the concatenation is
    /// reshuffled so tier boundaries do not show in the ordering.
    pub fn balanced_names(&self, lists: &WordLists, count: usize) -> Vec<String> {
        let (easy, medium, hard) = balanced_split(count);

        let mut names = self.pick_names(lists.tier(Difficulty::Easy), easy);
        names.extend(self.pick_names(lists.tier(Difficulty::Medium), medium));
        names.extend(self.pick_names(lists.tier(Difficulty::Hard), hard));

        let mut seen = HashSet::new();
        names.retain(|n| seen.insert(natural_key(n)));

        self.shuffle(&mut names);
        names
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.rng.lock());
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler").finish_non_exhaustive()
    }
}
