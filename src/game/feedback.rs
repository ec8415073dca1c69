//! Feedback shown to the player

use crate::data::Tone;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Entries kept in the history panel
pub const LOG_CAPACITY: usize = 100;

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub timestamp: DateTime<Utc>,
    pub tone: Tone,
    pub message: String,
}

impl Feedback {
    pub fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            tone,
            message: message.into(),
        }
    }
}

/// Bounded history of feedback, oldest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackLog {
    entries: VecDeque<Feedback>,
}

impl FeedbackLog {
    pub fn push(&mut self, feedback: Feedback) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(feedback);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Feedback> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Feedback> + ExactSizeIterator {
        self.entries.iter()
    }
}
