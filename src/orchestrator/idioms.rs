//! Idiom batches and refresh variations.

use std::sync::Arc;

use crate::store::{card_id, Sampler, StaticStore};
use crate::types::entry::{Card, DifficultyFilter, Idiom};
use crate::{LexiError, LexiResult};

/// Number of idioms a refresh draws before rewriting them.
pub const REFRESH_POOL: usize = 10;

/// Field a variation rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationField {
    Example,
    Explanation,
}

/// A rewrite template. `{}` is replaced by the source text.
#[derive(Debug, Clone, Copy)]
pub struct Variation {
    pub field: VariationField,
    pub prefix: &'static str,
}

pub const VARIATIONS: [Variation; 6] = [
    Variation {
        field: VariationField::Example,
        prefix: "Here's an example: ",
    },
    Variation {
        field: VariationField::Example,
        prefix: "For instance: ",
    },
    Variation {
        field: VariationField::Example,
        prefix: "As an example: ",
    },
    Variation {
        field: VariationField::Explanation,
        prefix: "This means: ",
    },
    Variation {
        field: VariationField::Explanation,
        prefix: "In other words: ",
    },
    Variation {
        field: VariationField::Explanation,
        prefix: "Simply put: ",
    },
];

impl Variation {
    /// Applies the template. Example templates quote the idiom itself,
    /// explanation templates restate the existing explanation.
    pub fn apply(&self, mut idiom: Idiom) -> Idiom {
        match self.field {
            VariationField::Example => {
                idiom.example = format!("{}{}", self.prefix, idiom.english);
            }
            VariationField::Explanation => {
                idiom.explanation = format!("{}{}", self.prefix, idiom.explanation);
            }
        }
        idiom
    }
}

/// Serves idiom batches from the static store.
pub struct IdiomService {
    store: Arc<StaticStore>,
    sampler: Arc<Sampler>,
}

impl IdiomService {
    pub fn new(store: Arc<StaticStore>, sampler: Arc<Sampler>) -> Self {
        Self { store, sampler }
    }

    /// Up to `count` distinct idioms, optionally restricted to one tier.
    pub fn get_idioms(&self, count: usize, filter: DifficultyFilter) -> Vec<Card<Idiom>> {
        let prefix = match filter {
            DifficultyFilter::All => "idiom".to_string(),
            DifficultyFilter::Only(d) => format!("idiom-{}", d),
        };
        self.sampler
            .sample(self.store.idioms(), count, filter, &prefix)
    }

    /// Draws [`REFRESH_POOL`] idioms and rewrites each with a random
    /// template, returning at most `count` of them.
    pub fn generate_variations(&self, count: usize) -> LexiResult<Vec<Card<Idiom>>> {
        let pool = self.store.idioms();
        if pool.is_empty() {
            return Err(LexiError::EmptyResult("idiom pool is empty".to_string()));
        }

        let mut drawn: Vec<&Idiom> = pool.iter().collect();
        self.sampler.shuffle(&mut drawn);
        drawn.truncate(REFRESH_POOL.min(count));

        Ok(drawn
            .into_iter()
            .enumerate()
            .map(|(i, idiom)| {
                let variation = VARIATIONS[self.sampler.index(VARIATIONS.len())];
                Card::new(card_id("dynamic", i), variation.apply(idiom.clone()))
            })
            .collect())
    }

    /// Fresh idioms for a refresh. Falls back to a plain sample when the
    /// variation generator fails.
    pub fn refresh_idioms(&self, count: usize) -> Vec<Card<Idiom>> {
        match self.generate_variations(count) {
            Ok(cards) => cards,
            Err(e) => {
                tracing::warn!(error = %e, "Idiom variations failed, using static sample");
                self.get_idioms(count, DifficultyFilter::All)
            }
        }
    }

    pub fn total(&self) -> usize {
        self.store.idioms().len()
    }
}
