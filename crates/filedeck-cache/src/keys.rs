//! Key builders for all FileDeck key-value entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Key for a session token entry. The value is the owning user's id.
pub fn auth_token(token: &str) -> String {
    format!("auth_{token}")
}
