//! User model and session state.

use serde::{Deserialize, Serialize};

/// Account role selected at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// User record persisted under the `currentUser` key.
///
/// Immutable once created; cleared on logout. The password is plaintext
/// because nothing here is real authentication (demo only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Login timestamp in epoch millis, as an opaque string
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Free-text gender as entered in the form
    pub gender: String,
    pub age: u32,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Process-wide session state.
///
/// Invariant: `is_authenticated` holds exactly when `user` is present, and
/// `role` mirrors `user.role`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub role: Option<Role>,
}

impl Default for AuthState {
    /// Logged-out state, the initial state before hydration.
    fn default() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            role: None,
        }
    }
}

impl AuthState {
    /// Authenticated state for the given user.
    pub fn authenticated(user: User) -> Self {
        Self {
            is_authenticated: true,
            role: Some(user.role),
            user: Some(user),
        }
    }
}
