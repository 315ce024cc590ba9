//! Session endpoints
//!
//! Each command locks the session map, applies one transition with `now`
//! sampled once, and returns the fresh snapshot. The lock serializes
//! overlapping signals from the host environment.

use std::collections::HashMap;
use std::sync::MutexGuard;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{CreateSessionResponse, SessionSnapshot, SwitchViewRequest};
use crate::{AppState, SharedStore};
use wordloop_core::{Session, SessionConfig};

type Sessions<'a> = MutexGuard<'a, HashMap<Uuid, Session<SharedStore>>>;

fn session_mut<'a>(sessions: &'a mut Sessions<'_>, id: Uuid) -> Result<&'a mut Session<SharedStore>> {
    sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session {id}")))
}

/// POST /api/sessions
pub async fn create(State(state): State<AppState>) -> Result<Json<CreateSessionResponse>> {
    let session = Session::start(state.store.clone(), SessionConfig::default(), Utc::now());
    let snapshot = session.snapshot();
    let session_id = Uuid::new_v4();

    state
        .sessions
        .lock()
        .expect("sessions lock")
        .insert(session_id, session);

    tracing::info!("Created session {}", session_id);

    Ok(Json(CreateSessionResponse {
        session_id,
        snapshot,
    }))
}

/// GET /api/sessions/{id}
pub async fn snapshot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    Ok(Json(session.snapshot()))
}

/// POST /api/sessions/{id}/advance
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    session.advance(Utc::now())?;
    Ok(Json(session.snapshot()))
}

/// POST /api/sessions/{id}/reset
pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    session.reset()?;
    Ok(Json(session.snapshot()))
}

/// POST /api/sessions/{id}/step-forward
pub async fn step_forward(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    session.step_forward(Utc::now())?;
    Ok(Json(session.snapshot()))
}

/// POST /api/sessions/{id}/step-backward
pub async fn step_backward(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    session.step_backward();
    Ok(Json(session.snapshot()))
}

/// POST /api/sessions/{id}/view
pub async fn switch_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SwitchViewRequest>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    session.switch_view(request.target);
    Ok(Json(session.snapshot()))
}

/// POST /api/sessions/{id}/sentence/next
pub async fn next_sentence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    session.next_sentence();
    Ok(Json(session.snapshot()))
}

/// POST /api/sessions/{id}/sentence/previous
pub async fn previous_sentence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    session.previous_sentence();
    Ok(Json(session.snapshot()))
}

/// POST /api/sessions/{id}/restart
pub async fn restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.lock().expect("sessions lock");
    let session = session_mut(&mut sessions, id)?;
    session.restart_batch(Utc::now());
    Ok(Json(session.snapshot()))
}
