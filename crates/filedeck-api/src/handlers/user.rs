//! User registration and current-user handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use filedeck_auth::credentials::digest::password_digest;
use filedeck_core::error::AppError;
use filedeck_entity::user::NewUser;

use crate::dto::request::RegisterRequest;
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// POST /users
///
/// Registers a new user. The password is digested before storage; the
/// plaintext is dropped here. Email uniqueness is enforced by a
/// lookup-before-insert plus the unique index for the concurrent case.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let email = req
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| AppError::validation("Missing email"))?;
    let password = req
        .password
        .filter(|password| !password.is_empty())
        .ok_or_else(|| AppError::validation("Missing password"))?;

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::conflict("Already exist").into());
    }

    let user = state
        .users
        .create(&NewUser {
            email,
            password_digest: password_digest(&password),
        })
        .await?;

    info!(user_id = %user.id, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id,
            email: user.email,
        }),
    ))
}

/// GET /users/me
///
/// The user owning the presented session token.
pub async fn me(SessionUser(user): SessionUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id,
        email: user.email,
    })
}
