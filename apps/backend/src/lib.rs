pub mod catalog;
pub mod error;
pub mod models;
pub mod routes;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use wordloop_core::{Item, ItemStore, MemoryStore, ReviewState, Session, StoreError};

/// Handle to the canonical in-memory store, shared by every session.
///
/// Long-term review state written by one session is visible to batches
/// composed by any other.
#[derive(Clone)]
pub struct SharedStore(Arc<Mutex<MemoryStore>>);

impl SharedStore {
    pub fn new(store: MemoryStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }
}

impl ItemStore for SharedStore {
    fn all_items(&self) -> Vec<Item> {
        self.0.lock().expect("store lock").all_items()
    }

    fn item(&self, id: i64) -> Option<Item> {
        self.0.lock().expect("store lock").item(id)
    }

    fn update_review_state(&mut self, id: i64, state: &ReviewState) -> Result<(), StoreError> {
        self.0
            .lock()
            .expect("store lock")
            .update_review_state(id, state)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub sessions: Arc<Mutex<HashMap<Uuid, Session<SharedStore>>>>,
}

impl AppState {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: SharedStore::new(store),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

/// Build the API router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Catalog routes
        .route("/api/items", get(routes::catalog::list_items))
        .route("/api/items/{id}", get(routes::catalog::get_item))
        // Session routes
        .route("/api/sessions", post(routes::session::create))
        .route("/api/sessions/{id}", get(routes::session::snapshot))
        .route("/api/sessions/{id}/advance", post(routes::session::advance))
        .route("/api/sessions/{id}/reset", post(routes::session::reset))
        .route(
            "/api/sessions/{id}/step-forward",
            post(routes::session::step_forward),
        )
        .route(
            "/api/sessions/{id}/step-backward",
            post(routes::session::step_backward),
        )
        .route("/api/sessions/{id}/view", post(routes::session::switch_view))
        .route(
            "/api/sessions/{id}/sentence/next",
            post(routes::session::next_sentence),
        )
        .route(
            "/api/sessions/{id}/sentence/previous",
            post(routes::session::previous_sentence),
        )
        .route("/api/sessions/{id}/restart", post(routes::session::restart))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog_path =
        std::env::var("CATALOG_PATH").unwrap_or_else(|_| "catalog.json".to_string());
    tracing::info!("Loading catalog from {}", catalog_path);
    let items = catalog::load_catalog(&catalog_path)?;
    tracing::info!("Loaded {} items", items.len());

    let state = AppState::new(MemoryStore::new(items));
    let app = router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
