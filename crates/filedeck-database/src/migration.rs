//! Database migration runner.

use tracing::info;

use filedeck_core::error::{AppError, ErrorKind};

use crate::connection::DatabaseClient;

/// Run all pending database migrations.
///
/// Requires the client to be ready; callers gate on
/// [`DatabaseClient::wait_until_ready`] first.
pub async fn run_migrations(client: &DatabaseClient) -> Result<(), AppError> {
    let pool = client.pool()?;

    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
