//! File record entity.

pub mod model;

pub use model::{FileKind, FileRecord, NewFileRecord};
