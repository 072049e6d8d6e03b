//! Token-to-user identity resolution.

use std::sync::Arc;

use filedeck_core::result::AppResult;
use filedeck_entity::user::User;

use crate::directory::UserDirectory;
use crate::token::service::SessionTokenService;

/// Resolves a session token to the full owning user record.
///
/// Used by every endpoint that requires authentication.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    tokens: Arc<SessionTokenService>,
    users: Arc<dyn UserDirectory>,
}

impl IdentityResolver {
    /// Create a resolver over the token service and the user directory.
    pub fn new(tokens: Arc<SessionTokenService>, users: Arc<dyn UserDirectory>) -> Self {
        Self { tokens, users }
    }

    /// Resolve a token to its user, or `None` if the token is unknown,
    /// expired, revoked, or the user record no longer exists.
    ///
    /// The last case matters: a stale token must never resolve to a
    /// phantom user after the record is deleted.
    pub async fn resolve_user(&self, token: &str) -> AppResult<Option<User>> {
        let Some(user_id) = self.tokens.resolve(token).await? else {
            return Ok(None);
        };
        self.users.find_by_id(user_id).await
    }
}
