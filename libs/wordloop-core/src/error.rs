//! Error types for wordloop-core.

use thiserror::Error;

/// Result type alias for session commands.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by session commands.
///
/// Most invalid inputs (no current item, retreat at level zero, a view
/// request the item has no content for) are deliberately no-ops, not errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The item store rejected a long-term state write. The triggering
    /// session transition was not committed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The interval scheduler was asked for a zero streak. Completion always
    /// increments the streak first, so this indicates a caller bug.
    #[error("review streak must be at least 1")]
    ZeroStreak,
}

/// Errors reported by an item store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item {id} not found")]
    NotFound { id: i64 },

    #[error("store rejected update: {0}")]
    Rejected(String),
}
