//! Token claims envelope and codec.
//!
//! A token is the JSON rendering of [`TokenClaims`]: the holder's profile
//! plus a plaintext copy of the shared secret. The scheme is deliberately
//! weak and kept that way for teaching: anyone who can read one valid
//! token learns the secret and can forge others. A real system would
//! replace this with a keyed signature over the payload or a server-held
//! secret.
//!
//! The serialized form is private to this crate. Callers transport tokens
//! as opaque strings and never parse them.

use serde::{Deserialize, Serialize};

use crate::users::Profile;

/// Payload embedded in every issued token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Profile of the user the token was issued to.
    pub user: Profile,
    /// Copy of the shared secret, checked on resolution.
    pub secret: String,
}

/// Error returned by [`encode_token`] and [`verify_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The claims could not be serialized.
    #[error("failed to encode token claims: {0}")]
    Encode(#[source] serde_json::Error),
    /// The raw text is not a well-formed claims envelope.
    #[error("failed to decode token claims: {0}")]
    Decode(#[source] serde_json::Error),
    /// The embedded secret does not equal the shared secret.
    #[error("token secret mismatch")]
    SecretMismatch,
}

/// Serialize claims into an opaque token string.
///
/// # Errors
///
/// Returns [`TokenError::Encode`] if serialization fails.
pub fn encode_token(claims: &TokenClaims) -> Result<String, TokenError> {
    serde_json::to_string(claims).map_err(TokenError::Encode)
}

/// Parse untrusted token text and check its embedded secret.
///
/// Success means the text round-trips as a claims envelope and the embedded
/// secret equals `secret` exactly. It does not mean the embedded profile
/// exists in any registry; that lookup belongs to the caller.
///
/// # Errors
///
/// Returns [`TokenError::Decode`] for malformed or mis-shaped text and
/// [`TokenError::SecretMismatch`] when the embedded secret differs.
pub fn verify_token(raw: &str, secret: &str) -> Result<TokenClaims, TokenError> {
    let claims: TokenClaims = serde_json::from_str(raw).map_err(TokenError::Decode)?;
    if claims.secret != secret {
        return Err(TokenError::SecretMismatch);
    }
    Ok(claims)
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
