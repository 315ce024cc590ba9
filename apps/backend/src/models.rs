//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from wordloop-core
pub use wordloop_core::{Item, Phrase, ReviewState, SessionConfig, SessionSnapshot, ViewPage};

/// POST /api/sessions response
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub snapshot: SessionSnapshot,
}

/// POST /api/sessions/{id}/view request body, e.g.
/// `{"page": "sentences", "index": 0}` or `{"page": "root"}`
#[derive(Debug, Deserialize)]
pub struct SwitchViewRequest {
    #[serde(flatten)]
    pub target: ViewPage,
}
