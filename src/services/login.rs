//! Login service: credential check and token issuance.

use serde::{Deserialize, Serialize};

use crate::state::AuthState;
use crate::token::{self, TokenClaims};
use crate::users;

/// Outcome marker carried in a login response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoginMessage {
    /// Credentials matched and a token was issued.
    Success,
    /// Rendered by display layers for a failed submission. `login` itself
    /// never returns this: failure is signaled by `None`.
    Fail,
}

/// Successful login: the status marker plus the issued token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: LoginMessage,
    pub token: String,
}

/// Authenticate a credential pair against the registry.
///
/// Both fields must match a record exactly (case-sensitive, no trimming);
/// the first matching record wins. Any non-matching pair returns `None`,
/// so unknown usernames and wrong passwords are indistinguishable to the
/// caller. No side effects: no audit trail, no rate limiting, no lockout.
///
/// The issued token embeds the matched profile and the state's shared
/// secret. Tokens are not stored after issuance; any number may be
/// outstanding at once, each independently resolvable for the life of the
/// process.
///
/// Async by calling convention only: the lookup is pure in-memory compute
/// with no blocking, I/O, or cancellation points.
pub async fn login(state: &AuthState, username: &str, password: &str) -> Option<LoginResponse> {
    let Some(user) = users::find_by_credentials(&state.users, username, password) else {
        tracing::debug!(%username, "login rejected: no matching credentials");
        return None;
    };

    let claims = TokenClaims { user: user.profile.clone(), secret: state.secret.clone() };
    let token = token::encode_token(&claims).ok()?;

    tracing::debug!(%username, name = %user.profile.name, "login succeeded");
    Some(LoginResponse { message: LoginMessage::Success, token })
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
