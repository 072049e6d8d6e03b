//! `SessionUser` extractor — pulls the session token from the `X-Token`
//! header and resolves it to the owning user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use filedeck_core::error::AppError;
use filedeck_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session token header.
pub const TOKEN_HEADER: &str = "x-token";

/// Extracted authenticated user, available to any handler that lists it.
///
/// Rejection is an authentication error for a missing, unknown, expired,
/// or revoked token; all four look identical to the client.
#[derive(Debug, Clone)]
pub struct SessionUser(pub User);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing X-Token header"))?;

        let user = state
            .identity
            .resolve_user(token)
            .await?
            .ok_or_else(|| AppError::authentication("Unknown or expired session token"))?;

        Ok(SessionUser(user))
    }
}
