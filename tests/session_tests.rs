// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle tests: hydration, login, logout, and the storage
//! failure policies around each.

mod common;

use common::{broken_app, test_app, test_user};
use fitdesk::models::Role;
use fitdesk::store::{keys, Store};

#[tokio::test]
async fn test_initial_state_is_logged_out() {
    let app = test_app();
    let auth = app.session.auth_state().await;

    assert!(!auth.is_authenticated);
    assert!(auth.user.is_none());
    assert!(auth.role.is_none());
    assert!(!app.session.is_hydrated());
}

#[tokio::test]
async fn test_check_auth_restores_persisted_user() {
    let store = Store::memory();
    store.set(keys::CURRENT_USER, &test_user()).await.unwrap();

    let app = fitdesk::AppState::new(fitdesk::config::Config::test_default(), store);
    app.session.check_auth().await;

    let auth = app.session.auth_state().await;
    assert!(auth.is_authenticated);
    assert_eq!(auth.role, Some(Role::User));
    assert_eq!(auth.user.unwrap().email, "jane@example.com");
    assert!(app.session.is_hydrated());
}

#[tokio::test]
async fn test_check_auth_with_empty_store() {
    let app = test_app();
    app.session.check_auth().await;

    assert!(!app.session.is_authenticated().await);
    assert!(app.session.is_hydrated());
}

#[tokio::test]
async fn test_check_auth_store_failure_stays_logged_out() {
    // Never fail-open to authenticated; hydration still completes.
    let app = broken_app();
    app.session.check_auth().await;

    assert!(!app.session.is_authenticated().await);
    assert!(app.session.is_hydrated());
}

#[tokio::test]
async fn test_login_persists_then_authenticates() {
    let app = test_app();

    assert!(app.session.login(test_user()).await);
    let auth = app.session.auth_state().await;
    assert!(auth.is_authenticated);
    assert_eq!(auth.role, Some(Role::User));

    // The record actually landed in the store
    let stored: Option<fitdesk::models::User> = app.store.get(keys::CURRENT_USER).await.unwrap();
    assert_eq!(stored.unwrap().id, "1700000000000");
}

#[tokio::test]
async fn test_login_persistence_failure_leaves_state_untouched() {
    // Login is fail-closed: no session without a persisted record.
    let app = broken_app();

    assert!(!app.session.login(test_user()).await);
    assert!(!app.session.is_authenticated().await);
}

#[tokio::test]
async fn test_logout_clears_state_and_store() {
    let app = test_app();
    app.session.login(test_user()).await;

    app.session.logout().await;

    assert!(!app.session.is_authenticated().await);
    let stored: Option<fitdesk::models::User> = app.store.get(keys::CURRENT_USER).await.unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_logout_proceeds_despite_store_failure() {
    // Logout is fail-safe: a remove failure must never leave a stale
    // authenticated session. Seed a store, then freeze it so reads work
    // (hydration authenticates) but the logout remove fails.
    let store = Store::memory();
    store.set(keys::CURRENT_USER, &test_user()).await.unwrap();

    let app = fitdesk::AppState::new(fitdesk::config::Config::test_default(), store.frozen());
    app.session.check_auth().await;
    assert!(app.session.is_authenticated().await);

    app.session.logout().await;
    assert!(!app.session.is_authenticated().await);
}

#[tokio::test]
async fn test_role_mirrors_user_role() {
    let app = test_app();
    let mut user = test_user();
    user.role = Role::Admin;

    app.session.login(user).await;

    let auth = app.session.auth_state().await;
    assert_eq!(auth.role, Some(Role::Admin));
    assert_eq!(auth.user.unwrap().role, Role::Admin);
}
