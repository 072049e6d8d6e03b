//! Trait definitions shared across FileDeck crates.

pub mod cache;
