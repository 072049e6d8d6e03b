//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use filedeck_core::error::{AppError, ErrorKind};
use filedeck_core::result::AppResult;
use filedeck_entity::user::{NewUser, User};

use crate::connection::DatabaseClient;

/// Repository for user lookup, insert, and count operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseClient,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(db: DatabaseClient) -> Self {
        Self { db }
    }

    fn pool(&self) -> AppResult<PgPool> {
        self.db.pool()
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let pool = self.pool()?;
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let pool = self.pool()?;
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Find a user by email and password digest.
    ///
    /// Absence covers both an unknown email and a wrong password; callers
    /// must not distinguish the two.
    pub async fn find_by_email_and_digest(
        &self,
        email: &str,
        digest: &str,
    ) -> AppResult<Option<User>> {
        let pool = self.pool()?;
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1 AND password_digest = $2")
            .bind(email)
            .bind(digest)
            .fetch_optional(&pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by credentials", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        let pool = self.pool()?;
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_digest) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_digest)
        .fetch_one(&pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Already exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<u64> {
        let pool = self.pool()?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(count as u64)
    }
}
