//! Shared authentication state.
//!
//! DESIGN
//! ======
//! `AuthState` is the explicit context injected into both service
//! operations: the user registry plus the shared secret, fixed at
//! construction and read-only afterwards. Nothing here is module-global
//! state, so tests can run against alternate registries and secrets
//! without any process-wide setup.

use crate::users::{Profile, UserRecord};

/// Shared secret seeded into the demo state. Embedded in every issued
/// token and compared on resolution.
const DEMO_SECRET: &str = "1234qwer!@#$";

/// Immutable registry and secret injected into the login and user-info
/// services. Shared by reference; no operation mutates it, so no locking
/// is needed regardless of call interleaving.
#[derive(Clone, Debug)]
pub struct AuthState {
    /// Registered users. Read-only after construction; first match wins on
    /// duplicate credentials or display names.
    pub users: Vec<UserRecord>,
    /// Secret embedded in issued tokens and checked on resolution. Never
    /// rotated for the life of the state.
    pub secret: String,
}

impl AuthState {
    #[must_use]
    pub fn new(users: Vec<UserRecord>, secret: impl Into<String>) -> Self {
        Self { users, secret: secret.into() }
    }

    /// The stock demo registry: three star-named users behind one password.
    #[must_use]
    pub fn demo() -> Self {
        let users = vec![
            UserRecord {
                username: "blue".into(),
                password: "1234".into(),
                profile: Profile { name: "blueStragglr".into() },
            },
            UserRecord {
                username: "white".into(),
                password: "1234".into(),
                profile: Profile { name: "whiteDwarf".into() },
            },
            UserRecord {
                username: "red".into(),
                password: "1234".into(),
                profile: Profile { name: "redGiant".into() },
            },
        ];
        Self::new(users, DEMO_SECRET)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
