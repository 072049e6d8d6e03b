//! Route definitions for the FileDeck HTTP API.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// Receives the fully-constructed `AppState` and threads it through every
/// route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(handlers::app::status))
        .route("/stats", get(handlers::app::stats))
        .route("/users", post(handlers::user::register))
        .route("/users/me", get(handlers::user::me))
        .route("/connect", get(handlers::auth::connect))
        .route("/disconnect", get(handlers::auth::disconnect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
