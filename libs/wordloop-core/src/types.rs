//! Core types for the vocabulary drilling engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed phrase using an item, with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    pub translation: String,
}

/// Long-term review scheduling state of one item.
///
/// Canonically owned by the item store; the session only modifies it through
/// [`crate::store::ItemStore::update_review_state`], always as a full replace
/// of all five fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewState {
    pub is_learned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
    pub interval_days: u32,
    pub consecutive_correct: u32,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            is_learned: false,
            last_review_date: None,
            next_review_date: None,
            interval_days: 1,
            consecutive_correct: 0,
        }
    }
}

/// One vocabulary entry: content plus long-term scheduling state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub text: String,
    pub phonetic: String,
    pub meaning: String,
    #[serde(default)]
    pub sentences: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_info: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    /// Opaque reference to audio content; playback is not this crate's job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_ref: Option<String>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub review: ReviewState,
}

/// Tunables for batch composition and the mastery ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cap on overdue learned items per batch.
    pub max_review_items: usize,
    /// Cap on not-yet-learned items per batch.
    pub max_new_items: usize,
    /// Batch size the composer tops up towards.
    pub target_batch_size: usize,
    /// Mastery level at which an item is done for the batch.
    pub required_level: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_review_items: 20,
            max_new_items: 20,
            target_batch_size: 40,
            required_level: 4,
        }
    }
}

/// Which content page of the current item is showing.
///
/// The sentence page carries its own paging index; every other page is a
/// plain selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum ViewPage {
    Word,
    Sentences { index: usize },
    Root,
    Phrases,
}

impl Default for ViewPage {
    fn default() -> Self {
        Self::Word
    }
}
