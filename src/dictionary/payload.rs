//! Free Dictionary API payload and its normalization into [`Word`].
//!
//! The service is loose about which fields it sends, so every field is
//! optional here. A missing field and an explicit `null` both read as
//! empty; remaining defaults are applied once, in [`normalize`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::difficulty::classify_difficulty;
use crate::store::WordLists;
use crate::types::entry::Word;
use crate::{LexiError, LexiResult};

/// Maximum number of synonyms or antonyms kept per word.
pub const MAX_RELATED: usize = 3;

/// Part of speech used when the payload has none.
pub const DEFAULT_PART_OF_SPEECH: &str = "noun";

/// One element of the top-level response array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEntry {
    pub word: String,

    #[serde(default)]
    pub phonetic: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub phonetics: Vec<ApiPhonetic>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPhonetic {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub definitions: Vec<ApiDefinition>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDefinition {
    #[serde(default)]
    pub definition: Option<String>,

    #[serde(default)]
    pub example: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub antonyms: Vec<String>,
}

/// Reads `null` as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Validates a raw response body and extracts its first entry.
///
/// The body must be a non-empty JSON array whose first element carries a
/// `word` field.
pub fn parse_body(word: &str, body: &[u8]) -> LexiResult<ApiEntry> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| LexiError::invalid_response(word, format!("body is not JSON: {}", e)))?;

    let first = match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| LexiError::invalid_response(word, "empty result array"))?,
        _ => return Err(LexiError::invalid_response(word, "expected a JSON array")),
    };

    if first.get("word").and_then(Value::as_str).is_none() {
        return Err(LexiError::invalid_response(word, "first entry has no 'word'"));
    }

    serde_json::from_value(first)
        .map_err(|e| LexiError::invalid_response(word, format!("unexpected shape: {}", e)))
}

/// Maps a validated entry onto the app's word record.
pub fn normalize(entry: ApiEntry, requested: &str, lists: &WordLists) -> Word {
    let english = if entry.word.trim().is_empty() {
        requested.trim().to_string()
    } else {
        entry.word.trim().to_string()
    };

    let phonetic = entry
        .phonetics
        .iter()
        .find(|p| non_empty(&p.text).is_some())
        .or_else(|| entry.phonetics.first());

    let pronunciation = phonetic
        .and_then(|p| non_empty(&p.text))
        .or_else(|| non_empty(&entry.phonetic));
    let audio_url = phonetic.and_then(|p| non_empty(&p.audio));

    let mut part_of_speech = DEFAULT_PART_OF_SPEECH.to_string();
    let mut definition = String::new();
    let mut example_sentences = Vec::new();
    let mut synonyms = Vec::new();
    let mut antonyms = Vec::new();

    if let Some(meaning) = entry.meanings.first() {
        if let Some(pos) = non_empty(&meaning.part_of_speech) {
            part_of_speech = pos;
        }

        if let Some(def) = meaning.definitions.first() {
            definition = non_empty(&def.definition).unwrap_or_default();
            example_sentences.extend(non_empty(&def.example));
            synonyms = first_n(&def.synonyms);
            antonyms = first_n(&def.antonyms);
        }

        if synonyms.is_empty() {
            synonyms = first_n(&meaning.synonyms);
        }
        if antonyms.is_empty() {
            antonyms = first_n(&meaning.antonyms);
        }
    }

    if example_sentences.is_empty() {
        example_sentences = placeholder_examples(&english);
    }

    let difficulty = classify_difficulty(&english, lists);

    Word {
        english,
        japanese: String::new(),
        part_of_speech,
        pronunciation,
        definition,
        example_sentences,
        synonyms,
        antonyms,
        audio_url,
        difficulty,
    }
}

/// Sentences used when the dictionary offers no example.
pub fn placeholder_examples(word: &str) -> Vec<String> {
    vec![
        format!("The word \"{}\" is commonly used in English.", word),
        format!("Learning \"{}\" will improve your vocabulary.", word),
    ]
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn first_n(items: &[String]) -> Vec<String> {
    items.iter().take(MAX_RELATED).cloned().collect()
}
