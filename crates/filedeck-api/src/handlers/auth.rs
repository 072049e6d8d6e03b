//! Sign-in and sign-out handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use tracing::info;

use filedeck_core::error::AppError;

use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::auth::TOKEN_HEADER;
use crate::state::AppState;

/// GET /connect
///
/// Exchanges a Basic credential for a fresh session token. Any credential
/// problem — missing header, malformed payload, unknown email, wrong
/// password — produces the identical 401.
pub async fn connect(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let user = state.verifier.verify(authorization).await?;
    let token = state.tokens.issue(user.id).await?;

    info!(user_id = %user.id, "User signed in");
    Ok(Json(TokenResponse { token }))
}

/// GET /disconnect
///
/// Revokes the presented session token. Revocation is idempotent: a token
/// that is already gone (expired, revoked, never issued) still yields 204.
/// Only a missing header is a 401.
pub async fn disconnect(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing X-Token header"))?;

    state.tokens.revoke(token).await?;
    Ok(StatusCode::NO_CONTENT)
}
