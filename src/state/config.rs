//! Game configuration.
//!
//! Durations are whole seconds, matching the host console settings. Phases copy
//! the values they need when they are entered, so edits made mid-phase only take
//! effect at the next phase entry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of rounds per game.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Default number of words offered to the drawer.
pub const DEFAULT_WORD_POOL_SIZE: usize = 3;

/// Default seconds the drawer has to pick a word.
pub const DEFAULT_SELECT_WORD_SECS: u64 = 20;

/// Default seconds of drawing and guessing per turn.
pub const DEFAULT_PLAY_SECS: u64 = 180;

/// Default seconds between letter reveals after the first one.
pub const DEFAULT_REVEAL_SECS: u64 = 5;

/// Default pause after each turn.
pub const DEFAULT_POST_PLAYING_SECS: u64 = 8;

/// Default pause after each round.
pub const DEFAULT_POST_ROUND_SECS: u64 = 10;

/// Default pause on the final scoreboard.
pub const DEFAULT_POST_GAME_SECS: u64 = 10;

/// Host-settable game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_rounds: u32,
    pub word_pool_size: usize,
    /// Zero means the fallback word is used immediately.
    pub select_word_secs: u64,
    pub play_secs: u64,
    pub reveal_secs: u64,
    pub post_playing_secs: u64,
    pub post_round_secs: u64,
    pub post_game_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            word_pool_size: DEFAULT_WORD_POOL_SIZE,
            select_word_secs: DEFAULT_SELECT_WORD_SECS,
            play_secs: DEFAULT_PLAY_SECS,
            reveal_secs: DEFAULT_REVEAL_SECS,
            post_playing_secs: DEFAULT_POST_PLAYING_SECS,
            post_round_secs: DEFAULT_POST_ROUND_SECS,
            post_game_secs: DEFAULT_POST_GAME_SECS,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every range constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds < 1 {
            return Err(ConfigError::OutOfRange {
                setting: "max_rounds",
                reason: "must be at least 1",
            });
        }
        if self.word_pool_size == 0 {
            return Err(ConfigError::OutOfRange {
                setting: "word_pool_size",
                reason: "must be greater than 0",
            });
        }
        if self.play_secs == 0 {
            return Err(ConfigError::OutOfRange {
                setting: "play_secs",
                reason: "must be greater than 0",
            });
        }
        if self.reveal_secs == 0 {
            return Err(ConfigError::OutOfRange {
                setting: "reveal_secs",
                reason: "must be greater than 0",
            });
        }
        Ok(())
    }

    /// Bring every field into range. Used where an invalid configuration
    /// would otherwise stall the game.
    pub fn clamped(mut self) -> Self {
        self.max_rounds = self.max_rounds.max(1);
        self.word_pool_size = self.word_pool_size.max(1);
        self.play_secs = self.play_secs.max(1);
        self.reveal_secs = self.reveal_secs.max(1);
        self
    }

    /// Apply a console-style setting such as `sketch_maxrounds 5`.
    ///
    /// The `sketch_` prefix is optional. On error the configuration is left
    /// untouched.
    pub fn apply_setting(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let key = name.trim().trim_start_matches("sketch_").to_ascii_lowercase();
        let mut next = self.clone();

        match key.as_str() {
            "maxrounds" => next.max_rounds = parse_value(name, value)?,
            "wordpoolsize" => next.word_pool_size = parse_value(name, value)?,
            "selectwordtime" => next.select_word_secs = parse_value(name, value)?,
            "playtime" => next.play_secs = parse_value(name, value)?,
            "revealtime" => next.reveal_secs = parse_value(name, value)?,
            _ => return Err(ConfigError::UnknownSetting(name.to_string())),
        }

        next.validate()?;
        log::info!("setting {} = {}", key, value.trim());
        *self = next;
        Ok(())
    }

    pub fn select_word_duration(&self) -> Duration {
        Duration::from_secs(self.select_word_secs)
    }

    pub fn play_duration(&self) -> Duration {
        Duration::from_secs(self.play_secs)
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_secs(self.reveal_secs)
    }

    pub fn post_playing_duration(&self) -> Duration {
        Duration::from_secs(self.post_playing_secs)
    }

    pub fn post_round_duration(&self) -> Duration {
        Duration::from_secs(self.post_round_secs)
    }

    pub fn post_game_duration(&self) -> Duration {
        Duration::from_secs(self.post_game_secs)
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        setting: name.to_string(),
        value: value.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid value {value:?} for {setting}")]
    InvalidValue { setting: String, value: String },

    #[error("{setting} {reason}")]
    OutOfRange {
        setting: &'static str,
        reason: &'static str,
    },

    #[error("Could not parse configuration: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.word_pool_size, 3);
        assert_eq!(config.select_word_duration(), Duration::from_secs(20));
        assert_eq!(config.play_duration(), Duration::from_secs(180));
    }

    #[test]
    fn test_apply_setting() {
        let mut config = GameConfig::new();

        config.apply_setting("sketch_maxrounds", "5").unwrap();
        config.apply_setting("wordpoolsize", " 4 ").unwrap();
        config.apply_setting("sketch_selectwordtime", "0").unwrap();
        config.apply_setting("sketch_playtime", "90").unwrap();

        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.word_pool_size, 4);
        assert_eq!(config.select_word_secs, 0);
        assert_eq!(config.play_secs, 90);
    }

    #[test]
    fn test_apply_setting_rejects_bad_input() {
        let mut config = GameConfig::new();

        assert!(matches!(
            config.apply_setting("sketch_gravity", "1"),
            Err(ConfigError::UnknownSetting(_))
        ));
        assert!(matches!(
            config.apply_setting("sketch_maxrounds", "lots"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.apply_setting("sketch_maxrounds", "0"),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            config.apply_setting("sketch_wordpoolsize", "0"),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            config.apply_setting("sketch_playtime", "0"),
            Err(ConfigError::OutOfRange { .. })
        ));

        // Untouched after failures
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_json() {
        let config = GameConfig::from_json(r#"{"max_rounds": 1, "play_secs": 9}"#).unwrap();
        assert_eq!(config.max_rounds, 1);
        assert_eq!(config.play_secs, 9);
        assert_eq!(config.word_pool_size, DEFAULT_WORD_POOL_SIZE);

        assert!(matches!(
            GameConfig::from_json(r#"{"word_pool_size": 0}"#),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
