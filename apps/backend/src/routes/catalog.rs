//! Catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::Item;
use crate::AppState;
use wordloop_core::ItemStore;

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>> {
    Ok(Json(state.store.all_items()))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>> {
    state
        .store
        .item(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("item {id}")))
}
