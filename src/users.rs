//! Mock user registry model.
//!
//! Records are fixed reference data: seeded once when the state is built
//! and never created, mutated, or removed afterwards. Lookups borrow the
//! registry slice and return references into it.

use serde::{Deserialize, Serialize};

/// Public profile data attached to a registered user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown to the caller after a successful token resolution.
    pub name: String,
}

/// A registered user: the credential pair plus the profile it unlocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub profile: Profile,
}

/// Find the first record matching both credentials exactly.
///
/// Comparison is case-sensitive with no trimming or normalization. `None`
/// is the ordinary invalid-credentials outcome, not an error.
#[must_use]
pub fn find_by_credentials<'a>(
    users: &'a [UserRecord],
    username: &str,
    password: &str,
) -> Option<&'a UserRecord> {
    users
        .iter()
        .find(|u| u.username == username && u.password == password)
}

/// Find the first record whose profile display name matches exactly.
///
/// Resolution is by display name, not username: two records sharing a
/// display name are ambiguous and the first wins. Known limitation of the
/// exercise, kept deliberately rather than switching to a keyed lookup.
#[must_use]
pub fn find_by_profile_name<'a>(users: &'a [UserRecord], name: &str) -> Option<&'a UserRecord> {
    users.iter().find(|u| u.profile.name == name)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
