//! Application state shared across all handlers.

use std::sync::Arc;

use filedeck_auth::credentials::verifier::CredentialVerifier;
use filedeck_auth::identity::IdentityResolver;
use filedeck_auth::token::service::SessionTokenService;
use filedeck_cache::provider::CacheManager;
use filedeck_core::config::AppConfig;
use filedeck_database::connection::DatabaseClient;
use filedeck_database::repositories::file::FileRepository;
use filedeck_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Store handles are
/// constructed once at startup and injected here; no component reaches
/// for global state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection handle (liveness + pool access).
    pub db: DatabaseClient,
    /// Key-value store (session tokens, liveness).
    pub cache: Arc<CacheManager>,
    /// User repository.
    pub users: Arc<UserRepository>,
    /// File record repository.
    pub files: Arc<FileRepository>,
    /// Credential verifier.
    pub verifier: Arc<CredentialVerifier>,
    /// Session token service.
    pub tokens: Arc<SessionTokenService>,
    /// Token-to-user identity resolver.
    pub identity: Arc<IdentityResolver>,
}
