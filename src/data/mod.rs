//! Data structures for the game
//!
//! Defines puzzles, the catalog they're drawn from, and feedback tones.

pub mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};

/// A single emoji story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// What the player sees
    pub emojis: String,
    /// Canonical movie title
    pub answer: String,
    /// Revealed on request, halves the reward
    pub hint: String,
}

impl Puzzle {
    pub fn new(emojis: &str, answer: &str, hint: &str) -> Self {
        Self {
            emojis: emojis.to_string(),
            answer: answer.to_string(),
            hint: hint.to_string(),
        }
    }
}

/// How a feedback line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Info,
    Hint,
    Success,
    Failure,
    Reveal,
    Warning,
}

impl Tone {
    pub fn symbol(&self) -> &'static str {
        match self {
            Tone::Info => "ℹ",
            Tone::Hint => "◆",
            Tone::Success => "✔",
            Tone::Failure => "✘",
            Tone::Reveal => "▶",
            Tone::Warning => "▲",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Info => write!(f, "INFO"),
            Tone::Hint => write!(f, "HINT"),
            Tone::Success => write!(f, "CORRECT"),
            Tone::Failure => write!(f, "MISS"),
            Tone::Reveal => write!(f, "ANSWER"),
            Tone::Warning => write!(f, "WARN"),
        }
    }
}
