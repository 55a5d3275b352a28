// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitdesk: session, stopwatch, and nutrition core for a small fitness
//! dashboard app.
//!
//! This crate provides the state and logic behind four screens — a mock
//! login/dashboard, a task list, a stopwatch with laps, and a calorie/macro
//! calculator — over a shared persistent key-value store. Rendering,
//! styling, and page routing are the host's business; the services here
//! expose state snapshots, guard decisions, and formatted display strings.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use services::{NutritionService, RouteGuard, SessionManager, TaskService};
use store::Store;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub session: Arc<SessionManager>,
    pub guard: RouteGuard,
    pub nutrition: NutritionService,
    pub tasks: TaskService,
}

impl AppState {
    /// Wire up all services over one store.
    pub fn new(config: Config, store: Store) -> Self {
        let session = Arc::new(SessionManager::new(store.clone()));
        Self {
            guard: RouteGuard::new(Arc::clone(&session)),
            nutrition: NutritionService::new(store.clone()),
            tasks: TaskService::new(store.clone()),
            session,
            store,
            config,
        }
    }
}
