// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use fitdesk::config::Config;
use fitdesk::models::{Role, User};
use fitdesk::store::Store;
use fitdesk::AppState;

/// App wired over a fresh in-memory store.
#[allow(dead_code)]
pub fn test_app() -> AppState {
    AppState::new(Config::test_default(), Store::memory())
}

/// App wired over a store where every operation fails.
#[allow(dead_code)]
pub fn broken_app() -> AppState {
    AppState::new(Config::test_default(), Store::broken())
}

/// A plain user record for login tests.
#[allow(dead_code)]
pub fn test_user() -> User {
    User {
        id: "1700000000000".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        gender: "female".to_string(),
        age: 30,
        email: "jane@example.com".to_string(),
        password: "hunter2".to_string(),
        role: Role::User,
    }
}
