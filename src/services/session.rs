// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state management backed by the persistent store.
//!
//! The manager holds the single source of truth for "who is logged in".
//! It performs no credential verification itself: the login form validates
//! input, and this service only persists the record and flips state.
//!
//! Failure policy:
//! - hydration read failure: logged, state stays logged out (never fail-open
//!   to authenticated)
//! - login persistence failure: logged, in-memory state is NOT updated
//! - logout removal failure: logged, state still becomes logged out (logout
//!   must never leave a stale authenticated session)

use tokio::sync::{watch, RwLock};

use crate::models::{AuthState, User};
use crate::store::{keys, Store};

/// Holds current authentication state, hydrated from the store at startup.
pub struct SessionManager {
    store: Store,
    state: RwLock<AuthState>,
    hydrated: watch::Sender<bool>,
}

impl SessionManager {
    pub fn new(store: Store) -> Self {
        let (hydrated, _) = watch::channel(false);
        Self {
            store,
            state: RwLock::new(AuthState::default()),
            hydrated,
        }
    }

    /// Hydrate session state from the store. Invoked once at startup.
    ///
    /// Marks hydration complete whether or not a user record was found, so
    /// the route guard can stop waiting either way.
    pub async fn check_auth(&self) {
        match self.store.get::<User>(keys::CURRENT_USER).await {
            Ok(Some(user)) => {
                tracing::info!(user_id = %user.id, role = ?user.role, "Session restored");
                *self.state.write().await = AuthState::authenticated(user);
            }
            Ok(None) => {
                tracing::debug!("No persisted session");
            }
            Err(e) => {
                tracing::error!(error = %e, "Session hydration failed, staying logged out");
            }
        }

        self.hydrated.send_replace(true);
    }

    /// Persist the user record and, on success, mark the session authenticated.
    ///
    /// Returns whether the session was established. A persistence failure is
    /// logged and leaves the in-memory state untouched.
    pub async fn login(&self, user: User) -> bool {
        if let Err(e) = self.store.set(keys::CURRENT_USER, &user).await {
            tracing::error!(error = %e, "Failed to persist user, login aborted");
            return false;
        }

        tracing::info!(user_id = %user.id, role = ?user.role, "User logged in");
        *self.state.write().await = AuthState::authenticated(user);
        true
    }

    /// Clear the persisted record and mark the session logged out.
    ///
    /// The state transition proceeds even if removal fails.
    pub async fn logout(&self) {
        if let Err(e) = self.store.remove(keys::CURRENT_USER).await {
            tracing::error!(error = %e, "Failed to remove persisted user during logout");
        }

        tracing::info!("User logged out");
        *self.state.write().await = AuthState::default();
    }

    /// Snapshot of the current session state.
    pub async fn auth_state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    /// Whether startup hydration has completed (success or failure).
    pub fn is_hydrated(&self) -> bool {
        *self.hydrated.borrow()
    }

    /// Wait until startup hydration has completed.
    pub async fn wait_hydrated(&self) {
        let mut rx = self.hydrated.subscribe();
        // The sender lives in self, so this cannot error while we hold &self.
        let _ = rx.wait_for(|done| *done).await;
    }
}
