//! File record entity model.
//!
//! File content handling lives outside this system; the record exists for
//! ownership, the public flag, and count aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The kind of a file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "file_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Folder,
    File,
    Image,
}

/// A file record owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Record kind.
    pub kind: FileKind,
    /// Whether the record is publicly visible.
    pub is_public: bool,
    /// Parent folder, if any.
    pub parent_id: Option<Uuid>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFileRecord {
    /// Owning user.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Record kind.
    pub kind: FileKind,
    /// Whether the record is publicly visible.
    pub is_public: bool,
    /// Parent folder, if any.
    pub parent_id: Option<Uuid>,
}
