//! Test fixtures and factory functions for creating test data.

use chrono::{DateTime, Duration, Utc};

use wordloop_core::{Item, Phrase, ReviewState};

/// A plain item with no optional content.
pub fn word(id: i64, text: &str) -> Item {
    Item {
        id,
        text: text.to_string(),
        phonetic: format!("/{text}/"),
        meaning: format!("meaning of {text}"),
        sentences: Vec::new(),
        root_info: None,
        synonyms: Vec::new(),
        antonyms: Vec::new(),
        audio_ref: None,
        phrases: Vec::new(),
        review: ReviewState::default(),
    }
}

/// An item with sentences, a root note and phrases.
pub fn rich_word(id: i64, text: &str) -> Item {
    let mut item = word(id, text);
    item.sentences = vec![
        format!("First sentence using {text}."),
        format!("Second sentence using {text}."),
    ];
    item.root_info = Some(format!("origin of {text}"));
    item.phrases = vec![Phrase {
        text: format!("{text} in a phrase"),
        translation: "translated phrase".to_string(),
    }];
    item
}

/// A learned item due for review at `due`.
pub fn learned_word(id: i64, text: &str, due: DateTime<Utc>) -> Item {
    let mut item = word(id, text);
    item.review = ReviewState {
        is_learned: true,
        last_review_date: Some(due - Duration::days(1)),
        next_review_date: Some(due),
        interval_days: 1,
        consecutive_correct: 1,
    };
    item
}

/// Default catalog: five plain unlearned items.
pub fn sample_catalog() -> Vec<Item> {
    vec![
        word(1, "absence"),
        word(2, "compose"),
        word(3, "plethora"),
        word(4, "taciturn"),
        word(5, "acumen"),
    ]
}

/// Catalog of items that have every content page.
pub fn rich_catalog() -> Vec<Item> {
    vec![
        rich_word(1, "serendipity"),
        rich_word(2, "ephemeral"),
        rich_word(3, "gregarious"),
    ]
}
