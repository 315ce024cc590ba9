//! Drilling session: per-batch mastery tracking and navigation.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::compose::compose_batch;
use crate::error::Result;
use crate::scheduler::review_interval;
use crate::store::ItemStore;
use crate::types::{Item, ReviewState, SessionConfig, ViewPage};

/// A drilling session over one composed batch.
///
/// Commands are `&mut self` methods, so every transition is applied
/// atomically under exclusive access. Transitions that involve a long-term
/// write issue the store update before touching any session field: a
/// rejected write surfaces as an error and leaves the session unchanged.
pub struct Session<S: ItemStore> {
    store: S,
    config: SessionConfig,
    rng: StdRng,
    batch: Vec<Item>,
    cursor: Option<usize>,
    mastery: HashMap<i64, u8>,
    completed: usize,
    batch_complete: bool,
    view: ViewPage,
    meaning_hidden: bool,
}

/// Read-only view of session state for presentation layers.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub batch: Vec<Item>,
    pub mastery: HashMap<i64, u8>,
    pub cursor: Option<usize>,
    pub view: ViewPage,
    pub meaning_hidden: bool,
    pub batch_complete: bool,
    pub completed_count: usize,
}

impl<S: ItemStore> Session<S> {
    /// Start a session, composing the first batch at `now`.
    pub fn start(store: S, config: SessionConfig, now: DateTime<Utc>) -> Self {
        Self::with_rng(store, config, now, StdRng::from_os_rng())
    }

    /// Start with a caller-supplied RNG for deterministic batch order.
    pub fn with_rng(store: S, config: SessionConfig, now: DateTime<Utc>, rng: StdRng) -> Self {
        let mut session = Self {
            store,
            config,
            rng,
            batch: Vec::new(),
            cursor: None,
            mastery: HashMap::new(),
            completed: 0,
            batch_complete: false,
            view: ViewPage::Word,
            meaning_hidden: false,
        };
        session.restart_batch(now);
        session
    }

    /// Compose a fresh batch and reset all per-batch state. Mastery is
    /// zeroed for every selected item, including ones finished in an earlier
    /// batch. An empty composition counts as an already-complete batch.
    pub fn restart_batch(&mut self, now: DateTime<Utc>) {
        let catalog = self.store.all_items();
        let batch = compose_batch(&catalog, now, &self.config, &mut self.rng);

        self.mastery = batch.iter().map(|item| (item.id, 0)).collect();
        self.cursor = if batch.is_empty() { None } else { Some(0) };
        self.batch_complete = batch.is_empty();
        self.batch = batch;
        self.completed = 0;
        self.view = ViewPage::Word;
        self.meaning_hidden = false;
    }

    /// Grade the current item as remembered: raise its mastery by one level.
    ///
    /// Reaching the required level marks the item learned and schedules its
    /// next long-term review through the store. At the ceiling this is a
    /// no-op, as is grading with no current item.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<()> {
        let Some(idx) = self.cursor else {
            return Ok(());
        };
        let id = self.batch[idx].id;
        let level = self.level_of(id);
        if level >= self.config.required_level {
            return Ok(());
        }

        let next_level = level + 1;
        if next_level == self.config.required_level {
            let review = &self.batch[idx].review;
            let streak = review.consecutive_correct + 1;
            let interval = review_interval(streak, review.interval_days)?;
            let state = ReviewState {
                is_learned: true,
                last_review_date: Some(now),
                next_review_date: Some(now + Duration::days(i64::from(interval))),
                interval_days: interval,
                consecutive_correct: streak,
            };
            self.store.update_review_state(id, &state)?;
            self.batch[idx].review = state;
            self.completed += 1;
            self.batch_complete = self.completed == self.batch.len();
        }

        self.mastery.insert(id, next_level);
        self.meaning_hidden = next_level >= self.hide_threshold();
        Ok(())
    }

    /// Grade the current item as forgotten: mastery back to zero and the
    /// long-term streak cleared. The other scheduling fields keep their
    /// values, so a forget never erases learned history.
    pub fn reset(&mut self) -> Result<()> {
        let Some(idx) = self.cursor else {
            return Ok(());
        };
        let id = self.batch[idx].id;
        let state = ReviewState {
            consecutive_correct: 0,
            ..self.batch[idx].review.clone()
        };
        self.store.update_review_state(id, &state)?;
        self.batch[idx].review = state;

        if self.level_of(id) == self.config.required_level {
            self.completed = self.completed.saturating_sub(1);
            self.batch_complete = false;
        }
        self.mastery.insert(id, 0);
        self.meaning_hidden = false;
        Ok(())
    }

    /// Step to the next unfinished item, grading the outgoing one first.
    ///
    /// The scan wraps around the batch and skips items already at the
    /// required level. If the grade completed the batch the cursor stays
    /// put. A full cycle with no landing spot also marks the batch complete;
    /// the completion check above makes that unreachable, and the tests pin
    /// it down.
    pub fn step_forward(&mut self, now: DateTime<Utc>) -> Result<()> {
        let Some(current) = self.cursor else {
            return Ok(());
        };
        self.advance(now)?;
        if self.batch_complete {
            return Ok(());
        }

        let size = self.batch.len();
        let mut idx = current;
        for _ in 0..size {
            idx = (idx + 1) % size;
            let level = self.level_of(self.batch[idx].id);
            if level < self.config.required_level {
                self.cursor = Some(idx);
                self.view = ViewPage::Word;
                self.meaning_hidden = level >= self.hide_threshold();
                return Ok(());
            }
        }

        self.batch_complete = true;
        Ok(())
    }

    /// Step to the immediately preceding item and peel one mastery level off
    /// it, undoing a completion if there was one. Backward motion is a
    /// session-local rewind: completed items are not skipped and nothing is
    /// written to the store.
    pub fn step_backward(&mut self) {
        let Some(current) = self.cursor else {
            return;
        };
        let size = self.batch.len();
        let prev = (current + size - 1) % size;
        let id = self.batch[prev].id;

        self.cursor = Some(prev);
        self.view = ViewPage::Word;

        let mut level = self.level_of(id);
        if level > 0 {
            if level == self.config.required_level {
                self.completed = self.completed.saturating_sub(1);
                self.batch_complete = false;
            }
            level -= 1;
            self.mastery.insert(id, level);
        }
        self.meaning_hidden = level >= self.hide_threshold();
    }

    /// Switch the displayed content page for the current item. A request for
    /// a page the item has no content for is ignored; a sentence index past
    /// the end is clamped.
    pub fn switch_view(&mut self, target: ViewPage) {
        let Some(item) = self.current_item() else {
            return;
        };
        self.view = match target {
            ViewPage::Word => ViewPage::Word,
            ViewPage::Sentences { index } if !item.sentences.is_empty() => ViewPage::Sentences {
                index: index.min(item.sentences.len() - 1),
            },
            ViewPage::Root if item.root_info.is_some() => ViewPage::Root,
            ViewPage::Phrases if !item.phrases.is_empty() => ViewPage::Phrases,
            _ => return,
        };
    }

    /// Page to the next example sentence, staying on the last one at the
    /// end. Only meaningful while the sentence page is showing.
    pub fn next_sentence(&mut self) {
        let ViewPage::Sentences { index } = self.view else {
            return;
        };
        let Some(item) = self.current_item() else {
            return;
        };
        if index + 1 < item.sentences.len() {
            self.view = ViewPage::Sentences { index: index + 1 };
        }
    }

    /// Page to the previous example sentence, staying on the first one at
    /// the start.
    pub fn previous_sentence(&mut self) {
        let ViewPage::Sentences { index } = self.view else {
            return;
        };
        if index > 0 {
            self.view = ViewPage::Sentences { index: index - 1 };
        }
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.cursor.and_then(|idx| self.batch.get(idx))
    }

    pub fn current_level(&self) -> u8 {
        self.current_item()
            .map(|item| self.level_of(item.id))
            .unwrap_or(0)
    }

    pub fn batch(&self) -> &[Item] {
        &self.batch
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn view(&self) -> ViewPage {
        self.view
    }

    pub fn meaning_hidden(&self) -> bool {
        self.meaning_hidden
    }

    pub fn is_batch_complete(&self) -> bool {
        self.batch_complete
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            batch: self.batch.clone(),
            mastery: self.mastery.clone(),
            cursor: self.cursor,
            view: self.view,
            meaning_hidden: self.meaning_hidden,
            batch_complete: self.batch_complete,
            completed_count: self.completed,
        }
    }

    fn level_of(&self, id: i64) -> u8 {
        self.mastery.get(&id).copied().unwrap_or(0)
    }

    fn hide_threshold(&self) -> u8 {
        self.config.required_level.saturating_sub(1)
    }
}
