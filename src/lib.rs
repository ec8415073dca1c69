//! Emoji Story Decoder
//!
//! A terminal movie guessing game: decode the emoji story, type the title,
//! and build up a streak.
//!
//! # Game Mechanics
//!
//! - **Guessing**: Case, spacing and punctuation don't matter ("spiderman" is "Spider-Man")
//! - **Scoring**: 10 points for a clean solve, 5 if you peeked at a hint
//! - **Streaks**: Every miss or skip resets your streak
//!
//! # Architecture
//!
//! - `game` - Puzzle session state machine and guess matching
//! - `data` - Puzzle catalog and the bundled movie list
//! - `tui` - Terminal user interface with ratatui
//! - `config` - Settings loaded from `movie_guesser.toml` and the environment
//! - `logging` - Tracing subscriber writing to a log file

pub mod config;
pub mod data;
pub mod game;
pub mod logging;
pub mod tui;

pub use config::Config;
pub use data::*;
pub use game::Session;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the startup path
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Click \"New Puzzle\" to start!")]
    NoActivePuzzle,

    #[error("Please enter your guess!")]
    EmptyGuess,

    #[error("Puzzle catalog is empty")]
    EmptyCatalog,

    #[error("Puzzle #{index} has an empty {field}")]
    InvalidPuzzle { index: usize, field: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),
}
