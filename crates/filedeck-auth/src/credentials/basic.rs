//! Basic authorization header parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::CredentialError;

/// An email/password pair decoded from a transport credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

/// Decode `base64(email:password)` out of an authorization header value.
///
/// The payload is everything after the first space. The decoded text is
/// split on the FIRST colon, so passwords containing colons survive.
pub fn parse(header: Option<&str>) -> Result<BasicCredentials, CredentialError> {
    let header = header.ok_or(CredentialError::Malformed)?;
    let (_scheme, payload) = header.split_once(' ').ok_or(CredentialError::Malformed)?;

    let decoded = STANDARD
        .decode(payload.trim())
        .map_err(|_| CredentialError::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| CredentialError::Malformed)?;

    let (email, password) = decoded.split_once(':').ok_or(CredentialError::Malformed)?;
    if email.is_empty() || password.is_empty() {
        return Err(CredentialError::Malformed);
    }

    Ok(BasicCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}
