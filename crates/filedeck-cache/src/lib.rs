//! # filedeck-cache
//!
//! Key-value store implementations for FileDeck. Two backends:
//!
//! - **redis**: the production backend, using the [redis](https://crates.io/crates/redis)
//!   crate's connection manager
//! - **memory**: in-process backend using [moka](https://crates.io/crates/moka),
//!   for tests and single-node development
//!
//! The backend is selected at runtime based on configuration. Session
//! tokens live here and nowhere else; entries have no durability beyond
//! their TTL.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
