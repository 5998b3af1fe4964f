//! Mock login and token-exchange core.
//!
//! Simulates a login flow against a fixed in-memory user list: [`login`]
//! checks a credential pair and issues an opaque token, then
//! [`get_user_info`] verifies that token and resolves it back to the
//! holder's profile. The "backend" is a seeded `Vec` plus a constant shared
//! secret; there is no networking, persistence, or session tracking, and
//! both operations are async by calling convention only.
//!
//! Every failure path (bad credentials, malformed token, wrong secret,
//! unknown profile name) surfaces as the same `None`. Callers are expected
//! to treat all of them identically: stop and do nothing further.

pub mod services;
pub mod state;
pub mod token;
pub mod users;

pub use services::login::{LoginMessage, LoginResponse, login};
pub use services::user_info::get_user_info;
pub use state::AuthState;
pub use token::{TokenClaims, TokenError};
pub use users::{Profile, UserRecord};
