//! # filedeck-api
//!
//! HTTP API layer for FileDeck built on Axum.
//!
//! Provides the REST endpoints, extractors, DTOs, and error mapping. The
//! router is a thin layer: all semantics live in the auth and store
//! crates.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
