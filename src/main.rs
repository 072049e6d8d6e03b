//! FileDeck Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use filedeck_auth::credentials::verifier::CredentialVerifier;
use filedeck_auth::directory::UserDirectory;
use filedeck_auth::identity::IdentityResolver;
use filedeck_auth::token::service::SessionTokenService;
use filedeck_cache::provider::CacheManager;
use filedeck_core::config::AppConfig;
use filedeck_core::error::AppError;
use filedeck_core::traits::cache::KeyValueStore;
use filedeck_database::connection::DatabaseClient;
use filedeck_database::repositories::file::FileRepository;
use filedeck_database::repositories::user::UserRepository;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FILEDECK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FileDeck v{}", env!("CARGO_PKG_VERSION"));

    let startup = Duration::from_secs(config.server.startup_timeout_seconds);

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabaseClient::new(&config.database);
    if db.wait_until_ready(startup).await {
        filedeck_database::migration::run_migrations(&db).await?;
    } else {
        // The server still starts; /status reports the store as down and
        // calls against it fail fast until the connection recovers.
        tracing::warn!(
            timeout_seconds = config.server.startup_timeout_seconds,
            "Database not ready at startup; continuing without migrations"
        );
    }

    // ── Step 2: Key-value store ──────────────────────────────────
    let cache = Arc::new(CacheManager::new(&config.cache)?);
    if !cache.wait_until_ready(startup).await {
        tracing::warn!(
            timeout_seconds = config.server.startup_timeout_seconds,
            "Key-value store not ready at startup; continuing"
        );
    }

    // ── Step 3: Repositories ─────────────────────────────────────
    let users = Arc::new(UserRepository::new(db.clone()));
    let files = Arc::new(FileRepository::new(db.clone()));

    // ── Step 4: Auth components ──────────────────────────────────
    let directory: Arc<dyn UserDirectory> = Arc::clone(&users) as _;
    let verifier = Arc::new(CredentialVerifier::new(Arc::clone(&directory)));
    let tokens = Arc::new(SessionTokenService::new(Arc::clone(&cache), &config.auth));
    let identity = Arc::new(IdentityResolver::new(Arc::clone(&tokens), directory));

    // ── Step 5: HTTP server ──────────────────────────────────────
    let state = filedeck_api::state::AppState {
        config: Arc::new(config.clone()),
        db,
        cache,
        users,
        files,
        verifier,
        tokens,
        identity,
    };

    let app = filedeck_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("FileDeck server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("FileDeck server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
