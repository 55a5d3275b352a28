// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitdesk bootstrap binary.
//!
//! Headless smoke run: loads configuration, opens the store, hydrates the
//! session, and reports what a rendering host would see on each screen.

use fitdesk::{config::Config, services::GuardDecision, store::Store, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(path = %config.storage_path.display(), "Starting fitdesk");

    let store = Store::open(&config.storage_path).await?;
    let state = AppState::new(config, store);

    // Hydration must complete before the guard is trusted
    state.session.check_auth().await;
    let auth = state.session.auth_state().await;
    tracing::info!(
        authenticated = auth.is_authenticated,
        role = ?auth.role,
        "Session hydrated"
    );

    for path in ["/dashboard/1", "/tasks/2", "/timer/3", "/nutrition/4"] {
        let verdict = match state.guard.check(path).await {
            GuardDecision::Render => "render".to_string(),
            GuardDecision::Redirect { to, .. } => format!("redirect -> {}", to),
        };
        tracing::info!(path, verdict = %verdict, "Route guard");
    }

    let (input, result) = state.nutrition.load().await;
    tracing::info!(
        has_result = result.is_some(),
        activity_level = ?input.activity_level,
        "Nutrition state loaded"
    );

    let tasks = state.tasks.load().await;
    tracing::info!(count = tasks.len(), "Task list loaded");

    Ok(())
}

/// Initialize structured logging with an env-driven filter.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitdesk=debug".parse().expect("valid directive"))
                .add_directive("info".parse().expect("valid directive")),
        )
        .with(format)
        .init();
}
