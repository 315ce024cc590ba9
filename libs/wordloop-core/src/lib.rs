//! Core spaced-repetition drilling engine.
//!
//! Provides:
//! - Batch composition over an item catalog (overdue reviews + new items)
//! - Per-batch mastery state machine with wrap-around navigation
//! - Expanding review-interval scheduler
//! - Item store contract with an in-memory implementation

pub mod compose;
pub mod error;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod types;

pub use compose::compose_batch;
pub use error::{Result, SessionError, StoreError};
pub use scheduler::review_interval;
pub use session::{Session, SessionSnapshot};
pub use store::{ItemStore, MemoryStore};
pub use types::{Item, Phrase, ReviewState, SessionConfig, ViewPage};
