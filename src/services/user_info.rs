//! User-info service: token resolution back to a registry profile.

use crate::state::AuthState;
use crate::token::{self, TokenError};
use crate::users::{self, Profile};

/// Resolve a previously issued token to its holder's profile.
///
/// All failure paths collapse to the same `None`: malformed token text, a
/// wrong or missing secret, and an embedded display name with no registry
/// entry are deliberately indistinguishable to the caller.
///
/// Resolution re-looks up the registry by the profile display name carried
/// in the token (first match wins), so two records sharing a display name
/// are ambiguous. Known quirk of the exercise, kept deliberately rather
/// than switching to a username or id keyed lookup.
///
/// Tokens carry no expiry and are not tracked after issuance: the same
/// token resolves identically any number of times while the secret and the
/// underlying record stand.
pub async fn get_user_info(state: &AuthState, token: &str) -> Option<Profile> {
    let claims = match token::verify_token(token, &state.secret) {
        Ok(claims) => claims,
        Err(TokenError::SecretMismatch) => {
            tracing::debug!("token rejected: secret mismatch");
            return None;
        }
        Err(err) => {
            tracing::debug!(error = %err, "token rejected: undecodable");
            return None;
        }
    };

    let Some(user) = users::find_by_profile_name(&state.users, &claims.user.name) else {
        tracing::debug!(name = %claims.user.name, "token rejected: no such profile");
        return None;
    };

    Some(user.profile.clone())
}

#[cfg(test)]
#[path = "user_info_test.rs"]
mod tests;
