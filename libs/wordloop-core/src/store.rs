//! Item store contract and the in-memory implementation.

use crate::error::StoreError;
use crate::types::{Item, ReviewState};

/// Canonical holder of the item catalog and its long-term review state.
///
/// The session reads the catalog through this trait when composing a batch
/// and writes scheduling state back through it on completion transitions.
pub trait ItemStore {
    /// Every item in the catalog. Order is arbitrary but stable within a
    /// call.
    fn all_items(&self) -> Vec<Item>;

    /// Look up a single item by id.
    fn item(&self, id: i64) -> Option<Item>;

    /// Replace the long-term review state of one item. An unknown id is a
    /// reported failure, not a panic.
    fn update_review_state(&mut self, id: i64, state: &ReviewState) -> Result<(), StoreError>;
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<Item>,
}

impl MemoryStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemStore for MemoryStore {
    fn all_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn item(&self, id: i64) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn update_review_state(&mut self, id: i64, state: &ReviewState) -> Result<(), StoreError> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.review = state.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound { id }),
        }
    }
}
