//! Session configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Whether the Predator is played by the heuristic opponent.
    #[serde(default = "default_opponent_enabled")]
    opponent_enabled: bool,

    /// Seed for the opponent's random source. Fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Display name of the first player.
    #[serde(default = "default_alien_name")]
    alien_name: String,

    /// Display name of the second player.
    #[serde(default = "default_predator_name")]
    predator_name: String,
}

fn default_opponent_enabled() -> bool {
    true
}

fn default_alien_name() -> String {
    "Alien".to_string()
}

fn default_predator_name() -> String {
    "Predator".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent_enabled: default_opponent_enabled(),
            seed: None,
            alien_name: default_alien_name(),
            predator_name: default_predator_name(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            opponent_enabled = config.opponent_enabled,
            seeded = config.seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides opponent mode.
    pub fn with_opponent_enabled(mut self, enabled: bool) -> Self {
        self.opponent_enabled = enabled;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(*config.opponent_enabled());
        assert_eq!(config.alien_name(), "Alien");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "opponent_enabled = false\nseed = 42\npredator_name = \"Yautja\""
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert!(!*config.opponent_enabled());
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(config.predator_name(), "Yautja");
        assert_eq!(config.alien_name(), "Alien");
    }

    #[test]
    fn test_bad_toml_reports_parse_error() {
        let err = GameConfig::from_toml("seed = \"many\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
