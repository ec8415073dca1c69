//! Game settings
//!
//! Read from `movie_guesser.toml` (optional) with `MOVIE_GUESSER_*`
//! environment overrides, e.g. `MOVIE_GUESSER_ADVANCE__POLICY=manual`.
//! Every field has a default so the game runs with no file at all.

use crate::game::Phase;
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file, looked up in the working directory
pub const CONFIG_FILE: &str = "movie_guesser.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "MOVIE_GUESSER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub advance: AdvanceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key before redrawing
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 100 }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// What happens after a puzzle is solved or skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvancePolicy {
    /// The player asks for the next puzzle
    Manual,
    /// The next puzzle is drawn after `delay_ms`
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvanceConfig {
    pub policy: AdvancePolicy,
    pub delay_ms: u64,
    /// Also auto-advance after a skip, not just after a solve
    pub after_skip: bool,
}

impl Default for AdvanceConfig {
    fn default() -> Self {
        Self {
            policy: AdvancePolicy::Auto,
            delay_ms: 1500,
            after_skip: true,
        }
    }
}

impl AdvanceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Delay before the next puzzle should be drawn on its own, if at all
    pub fn delay_after(&self, phase: Phase) -> Option<Duration> {
        if self.policy == AdvancePolicy::Manual {
            return None;
        }
        match phase {
            Phase::Solved => Some(self.delay()),
            Phase::Skipped if self.after_skip => Some(self.delay()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub file: PathBuf,
    /// `EnvFilter` directive; `RUST_LOG` wins when set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from("movie_guesser.log"),
            filter: "movie_guesser=info".to_string(),
        }
    }
}

impl Config {
    /// Load `path` if it exists, then apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        ::config::Config::builder()
            .add_source(
                ::config::File::new(&path.to_string_lossy(), ::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|err| GameError::Config(err.to_string()))
    }

    /// Parse settings from TOML text alone
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        ::config::Config::builder()
            .add_source(::config::File::from_str(text, ::config::FileFormat::Toml))
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|err| GameError::Config(err.to_string()))
    }
}
