//! CLI command implementations.

use std::path::PathBuf;

use serde::Serialize;

use crate::api;
use crate::dictionary::{DictionaryClient, FreeDictionaryClient};
use crate::orchestrator::Deck;
use crate::store::WordLists;
use crate::types::config::Config;
use crate::types::entry::DifficultyFilter;
use crate::types::responses::{IdiomsResponse, WordsResponse};
use crate::LexiResult;

/// Writes a default `lexideck.toml` into `path`.
pub async fn init(path: Option<PathBuf>) -> LexiResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("lexideck.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Adjust [server] and [dictionary] as needed");
    println!("  2. Start the API: lexideck serve");

    Ok(())
}

/// Starts the HTTP API.
pub async fn serve(host: Option<String>, port: Option<u16>, config: &Config) -> LexiResult<()> {
    let mut config = config.clone();
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::debug!(
        "Configuration: bind={}, dictionary={}, cache={}",
        config.server.bind_address(),
        config.dictionary.enabled,
        config.cache.capacity
    );

    api::serve(&config).await
}

/// Prints one word batch.
pub async fn words(
    count: usize,
    difficulty: Option<String>,
    offline: bool,
    config: &Config,
) -> LexiResult<()> {
    let deck = Deck::from_config(config)?;
    let filter = DifficultyFilter::parse(difficulty.as_deref());
    let batch = deck.words.get_words(count, filter, !offline).await?;

    if let Some(warning) = &batch.warning {
        eprintln!("Warning: {}", warning);
    }

    print_json(&WordsResponse::new(batch))
}

/// Prints idioms, sampled or rewritten.
pub async fn idioms(
    count: usize,
    difficulty: Option<String>,
    refresh: bool,
    config: &Config,
) -> LexiResult<()> {
    let deck = Deck::from_config(config)?;

    let cards = if refresh {
        if difficulty.is_some() {
            tracing::warn!("--difficulty is ignored with --refresh");
        }
        deck.idioms.refresh_idioms(count)
    } else {
        let filter = DifficultyFilter::parse(difficulty.as_deref());
        deck.idioms.get_idioms(count, filter)
    };

    print_json(&IdiomsResponse::new(cards))
}

/// Fetches one word straight from the dictionary, bypassing the cache.
pub async fn lookup(word: &str, config: &Config) -> LexiResult<()> {
    let client = FreeDictionaryClient::from_config(&config.dictionary, WordLists::builtin())?;
    tracing::debug!(client = client.name(), "Looking up '{}'", word);

    let entry = client.fetch_word(word).await?;
    print_json(&entry)
}

/// Shows pool sizes and cache configuration.
pub async fn stats(config: &Config) -> LexiResult<()> {
    let deck = Deck::from_config(config)?;
    let stats = deck.stats().await;
    let words = stats.available_words;

    println!("Candidate words:");
    println!("  easy:   {}", words.easy);
    println!("  medium: {}", words.medium);
    println!("  hard:   {}", words.hard);
    println!("  total:  {}", words.total);
    println!();
    println!("Idioms: {}", deck.idioms.total());
    println!();
    println!("Dictionary:");
    if config.dictionary.enabled {
        println!("  ✓ enabled ({})", config.dictionary.base_url);
    } else {
        println!("  ○ disabled");
    }
    println!("  timeout: {}s", config.dictionary.timeout_secs);
    println!("  cache capacity: {}", stats.max_cache_size);

    Ok(())
}

/// Shows version.
pub fn version() {
    println!("lexideck {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Idiom and vocabulary flashcard API");
}

fn print_json<T: Serialize>(value: &T) -> LexiResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
