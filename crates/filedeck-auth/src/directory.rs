//! User lookup seam between the auth components and the record store.

use async_trait::async_trait;
use uuid::Uuid;

use filedeck_core::result::AppResult;
use filedeck_database::repositories::user::UserRepository;
use filedeck_entity::user::User;

/// Read-only user lookup as the auth components need it.
///
/// Implemented by the Postgres-backed [`UserRepository`]; tests substitute
/// an in-memory directory so credential and identity logic runs without a
/// database.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user whose email and password digest both match.
    ///
    /// Absence covers unknown email and wrong password alike.
    async fn find_by_email_and_digest(&self, email: &str, digest: &str)
    -> AppResult<Option<User>>;

    /// Find a user by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_email_and_digest(
        &self,
        email: &str,
        digest: &str,
    ) -> AppResult<Option<User>> {
        UserRepository::find_by_email_and_digest(self, email, digest).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(self, id).await
    }
}
