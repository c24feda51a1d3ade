//! Learning entries: idioms, words, and the cards that wrap them.

use serde::{Deserialize, Serialize};

/// Difficulty tier of an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parses a tier name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty restriction requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Lenient parse: anything that is not a known tier means `All`.
    pub fn parse(value: Option<&str>) -> Self {
        value
            .and_then(Difficulty::parse)
            .map(DifficultyFilter::Only)
            .unwrap_or(DifficultyFilter::All)
    }

    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => *d == difficulty,
        }
    }
}

impl std::fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyFilter::All => f.write_str("all"),
            DifficultyFilter::Only(d) => d.fmt(f),
        }
    }
}

/// Anything that can be drawn by the sampler.
pub trait LexicalEntry: Clone {
    fn english(&self) -> &str;
    fn difficulty(&self) -> Difficulty;

    /// Natural key used for de-duplication and cache lookups.
    fn natural_key(&self) -> String {
        natural_key(self.english())
    }
}

/// Trimmed, lower-cased form of an English headword.
pub fn natural_key(english: &str) -> String {
    english.trim().to_lowercase()
}

/// An idiom card body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename = "idiom")]
pub struct Idiom {
    pub english: String,
    pub japanese: String,
    pub example: String,
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl Idiom {
    pub fn new(
        english: impl Into<String>,
        japanese: impl Into<String>,
        example: impl Into<String>,
        explanation: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            english: english.into(),
            japanese: japanese.into(),
            example: example.into(),
            explanation: explanation.into(),
            difficulty,
        }
    }
}

impl LexicalEntry for Idiom {
    fn english(&self) -> &str {
        &self.english
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// A vocabulary word card body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename = "word", rename_all = "camelCase")]
pub struct Word {
    pub english: String,
    pub japanese: String,
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub definition: String,
    pub example_sentences: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    pub difficulty: Difficulty,
}

impl LexicalEntry for Word {
    fn english(&self) -> &str {
        &self.english
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// An entry as handed to a client: the body plus a per-response id.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Card<T> {
    pub id: String,
    #[serde(flatten)]
    pub entry: T,
}

impl<T> Card<T> {
    pub fn new(id: impl Into<String>, entry: T) -> Self {
        Self {
            id: id.into(),
            entry,
        }
    }
}

/// Where a batch of cards came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Source {
    #[serde(rename = "external-api")]
    ExternalApi,
    #[serde(rename = "internal-database-fallback")]
    InternalDatabaseFallback,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::ExternalApi => write!(f, "external-api"),
            Source::InternalDatabaseFallback => write!(f, "internal-database-fallback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_word() -> Word {
        Word {
            english: "happy".to_string(),
            japanese: "幸せな".to_string(),
            part_of_speech: "adjective".to_string(),
            pronunciation: Some("/ˈhæpi/".to_string()),
            definition: "Feeling pleasure".to_string(),
            example_sentences: vec!["She felt happy.".to_string()],
            synonyms: vec!["glad".to_string()],
            antonyms: vec![],
            audio_url: None,
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse(" HARD "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("expert"), None);
    }

    #[test]
    fn test_filter_parse_is_lenient() {
        assert_eq!(DifficultyFilter::parse(None), DifficultyFilter::All);
        assert_eq!(DifficultyFilter::parse(Some("")), DifficultyFilter::All);
        assert_eq!(DifficultyFilter::parse(Some("all")), DifficultyFilter::All);
        assert_eq!(DifficultyFilter::parse(Some("nonsense")), DifficultyFilter::All);
        assert_eq!(
            DifficultyFilter::parse(Some("medium")),
            DifficultyFilter::Only(Difficulty::Medium)
        );
    }

    #[test]
    fn test_natural_key() {
        assert_eq!(natural_key("  Break the Ice "), "break the ice");
        assert_eq!(sample_word().natural_key(), "happy");
    }

    #[test]
    fn test_word_card_serialization() {
        let card = Card::new("w-1", sample_word());
        let value = serde_json::to_value(&card).unwrap();

        assert_eq!(value["id"], "w-1");
        assert_eq!(value["type"], "word");
        assert_eq!(value["partOfSpeech"], "adjective");
        assert_eq!(value["exampleSentences"], json!(["She felt happy."]));
        assert_eq!(value["difficulty"], "easy");
        assert!(value.get("audioUrl").is_none());
    }

    #[test]
    fn test_idiom_card_serialization() {
        let idiom = Idiom::new("Break the ice", "場を和ませる", "ex", "expl", Difficulty::Medium);
        let value = serde_json::to_value(Card::new("i-1", idiom)).unwrap();

        assert_eq!(value["type"], "idiom");
        assert_eq!(value["english"], "Break the ice");
        assert_eq!(value["difficulty"], "medium");
    }

    #[test]
    fn test_source_serialization() {
        assert_eq!(
            serde_json::to_value(Source::ExternalApi).unwrap(),
            json!("external-api")
        );
        assert_eq!(
            serde_json::to_value(Source::InternalDatabaseFallback).unwrap(),
            json!("internal-database-fallback")
        );
    }
}
