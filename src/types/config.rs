//! Configuration for lexideck.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::LexiResult;

/// Main configuration for lexideck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// External dictionary settings.
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Word cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Sampling settings.
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

/// External dictionary settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// When false every word batch is served from the static database.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL; the word is appended as the last path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request deadline (in seconds).
    #[serde(default = "default_dictionary_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every lookup.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl DictionaryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_base_url(),
            timeout_secs: default_dictionary_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_dictionary_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("lexideck/{}", env!("CARGO_PKG_VERSION"))
}

/// Word cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached words.
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_capacity() -> usize {
    200
}

/// Sampling settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fixed RNG seed; unset means seeded from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> LexiResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> LexiResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            dictionary: DictionaryConfig::default(),
            cache: CacheConfig::default(),
            sampling: SamplingConfig::default(),
        }
    }

    /// Loads `path` when it exists and parses; defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default_config();
        }
        Self::load(path).unwrap_or_else(|_| Self::default_config())
    }

    /// Applies the `PORT` environment variable, if set and valid.
    pub fn apply_env_overrides(&mut self) {
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default_config();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.cache.capacity, 200);
        assert_eq!(config.dictionary.timeout(), Duration::from_secs(5));
        assert!(config.dictionary.enabled);
        assert!(config.sampling.seed.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [dictionary]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.dictionary.enabled);
        assert_eq!(config.dictionary.timeout_secs, 5);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lexideck.toml");

        let mut config = Config::default_config();
        config.cache.capacity = 42;
        config.sampling.seed = Some(7);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.cache.capacity, 42);
        assert_eq!(loaded.sampling.seed, Some(7));
    }

    #[test]
    fn test_load_or_default() {
        let dir = TempDir::new().unwrap();

        let missing = Config::load_or_default(dir.path().join("absent.toml"));
        assert_eq!(missing.server.port, 3001);

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        assert_eq!(Config::load_or_default(&broken).server.port, 3001);

        let valid = dir.path().join("valid.toml");
        std::fs::write(&valid, "[server]\nport = 4100\n").unwrap();
        assert_eq!(Config::load_or_default(&valid).server.port, 4100);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(Config::load("/definitely/not/here/lexideck.toml").is_err());
    }

    #[test]
    fn test_bind_address() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 9000,
        };
        assert_eq!(server.bind_address(), "127.0.0.1:9000");
    }
}
