//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use filedeck_auth::credentials::digest::password_digest;
use filedeck_auth::credentials::verifier::CredentialVerifier;
use filedeck_auth::directory::UserDirectory;
use filedeck_auth::identity::IdentityResolver;
use filedeck_auth::token::service::SessionTokenService;
use filedeck_cache::provider::CacheManager;
use filedeck_core::config::AppConfig;
use filedeck_core::traits::cache::KeyValueStore;
use filedeck_database::connection::DatabaseClient;
use filedeck_database::repositories::file::FileRepository;
use filedeck_database::repositories::user::UserRepository;
use filedeck_entity::file::{FileKind, NewFileRecord};
use filedeck_entity::user::NewUser;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database client for direct seeding.
    pub db: DatabaseClient,
    /// Key-value store for direct assertions.
    pub cache: Arc<CacheManager>,
    /// User repository.
    pub users: Arc<UserRepository>,
    /// File repository.
    pub files: Arc<FileRepository>,
}

impl TestApp {
    /// Connect to the local test infrastructure and build the app.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        if let Ok(url) = std::env::var("FILEDECK_TEST_DATABASE_URL") {
            config.database.url = url;
        }
        if let Ok(url) = std::env::var("FILEDECK_TEST_REDIS_URL") {
            config.cache.redis.url = url;
        }

        let db = DatabaseClient::new(&config.database);
        assert!(
            db.wait_until_ready(Duration::from_secs(10)).await,
            "PostgreSQL is not reachable; integration tests need a local instance"
        );
        filedeck_database::migration::run_migrations(&db)
            .await
            .expect("Failed to run migrations");
        Self::clean_database(&db).await;

        let cache = Arc::new(CacheManager::new(&config.cache).expect("Failed to init cache"));
        assert!(
            cache.wait_until_ready(Duration::from_secs(10)).await,
            "Redis is not reachable; integration tests need a local instance"
        );
        cache.flush_all().await.expect("Failed to flush Redis");

        let users = Arc::new(UserRepository::new(db.clone()));
        let files = Arc::new(FileRepository::new(db.clone()));

        let directory: Arc<dyn UserDirectory> = Arc::clone(&users) as _;
        let verifier = Arc::new(CredentialVerifier::new(Arc::clone(&directory)));
        let tokens = Arc::new(SessionTokenService::new(Arc::clone(&cache), &config.auth));
        let identity = Arc::new(IdentityResolver::new(Arc::clone(&tokens), directory));

        let state = filedeck_api::state::AppState {
            config: Arc::new(config),
            db: db.clone(),
            cache: Arc::clone(&cache),
            users: Arc::clone(&users),
            files: Arc::clone(&files),
            verifier,
            tokens,
            identity,
        };

        let router = filedeck_api::router::build_router(state);

        Self {
            router,
            db,
            cache,
            users,
            files,
        }
    }

    /// Remove all test data.
    async fn clean_database(db: &DatabaseClient) {
        let pool = db.pool().expect("Database pool not ready");
        for table in ["files", "users"] {
            let query = format!("DELETE FROM {table}");
            sqlx::query(&query)
                .execute(&pool)
                .await
                .expect("Failed to clean table");
        }
    }

    /// Register a user directly and return their id.
    pub async fn seed_user(&self, email: &str, password: &str) -> Uuid {
        let user = self
            .users
            .create(&NewUser {
                email: email.to_string(),
                password_digest: password_digest(password),
            })
            .await
            .expect("Failed to seed user");
        user.id
    }

    /// Insert a file record directly and return its id.
    pub async fn seed_file(&self, user_id: Uuid, name: &str, kind: FileKind) -> Uuid {
        let record = self
            .files
            .create(&NewFileRecord {
                user_id,
                name: name.to_string(),
                kind,
                is_public: false,
                parent_id: None,
            })
            .await
            .expect("Failed to seed file record");
        record.id
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = match body {
            Some(body) => req
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap())),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Encode a Basic authorization header value.
pub fn basic_auth(email: &str, password: &str) -> String {
    use base64::Engine;
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(format!("{email}:{password}"))
    )
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` for empty bodies).
    pub body: Value,
}
