//! # filedeck-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the FileDeck entities.
//!
//! The connection is established asynchronously after construction; every
//! repository call made before the handshake completes fails fast with a
//! store-unavailable error instead of hanging.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabaseClient;
