//! Service status and stats handlers.

use axum::Json;
use axum::extract::State;

use filedeck_core::traits::cache::KeyValueStore;

use crate::dto::response::{StatsResponse, StatusResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /status
///
/// Liveness of both backing stores. Pure state reads; never performs I/O
/// and never fails, so a dead store reports `false` instead of erroring.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        redis: state.cache.is_alive(),
        db: state.db.is_alive(),
    })
}

/// GET /stats
///
/// Counts of the user and file collections, fetched concurrently.
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let (users, files) = tokio::try_join!(state.users.count(), state.files.count())?;
    Ok(Json(StatsResponse { users, files }))
}
