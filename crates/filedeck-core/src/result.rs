//! Convenience result type alias for FileDeck.

use crate::error::AppError;

/// A specialized `Result` type for FileDeck operations.
pub type AppResult<T> = Result<T, AppError>;
