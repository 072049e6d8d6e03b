//! Session token issuance, resolution, and revocation.

pub mod generator;
pub mod service;

pub use generator::{TokenGenerator, UuidTokenGenerator};
pub use service::SessionTokenService;
