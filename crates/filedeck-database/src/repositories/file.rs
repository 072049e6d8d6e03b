//! File record repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use filedeck_core::error::{AppError, ErrorKind};
use filedeck_core::result::AppResult;
use filedeck_entity::file::{FileRecord, NewFileRecord};

use crate::connection::DatabaseClient;

/// Repository for file record lookup, insert, and count operations.
///
/// File content and metadata CRUD are handled by external collaborators;
/// this repository exists for registration of records and the stats
/// aggregation contract.
#[derive(Debug, Clone)]
pub struct FileRepository {
    db: DatabaseClient,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(db: DatabaseClient) -> Self {
        Self { db }
    }

    fn pool(&self) -> AppResult<PgPool> {
        self.db.pool()
    }

    /// Find a file record by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FileRecord>> {
        let pool = self.pool()?;
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file by id", e))
    }

    /// Insert a new file record.
    pub async fn create(&self, data: &NewFileRecord) -> AppResult<FileRecord> {
        let pool = self.pool()?;
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO files (user_id, name, kind, is_public, parent_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(data.kind)
        .bind(data.is_public)
        .bind(data.parent_id)
        .fetch_one(&pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file record", e))
    }

    /// Count total file records.
    pub async fn count(&self) -> AppResult<u64> {
        let pool = self.pool()?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;
        Ok(count as u64)
    }
}
