// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Navigation gate for protected views.

use std::sync::Arc;

use crate::services::SessionManager;

/// Path prefixes that require an authenticated session.
const PROTECTED_PREFIXES: &[&str] = &["/tasks", "/timer", "/nutrition"];

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view unchanged.
    Render,
    /// Navigate elsewhere instead of rendering.
    Redirect {
        to: String,
        /// Replace the current history entry instead of pushing a new one
        replace: bool,
    },
}

/// Gate that redirects unauthenticated navigation away from protected views.
pub struct RouteGuard {
    session: Arc<SessionManager>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    /// Whether a path leads to a protected view.
    ///
    /// Route parameters after the prefix (e.g. `/timer/3`) are decorative.
    pub fn is_protected(path: &str) -> bool {
        PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p))
    }

    /// Evaluate a navigation. Re-run on every auth state change; verdicts
    /// are never cached.
    ///
    /// Protected paths wait for session hydration before deciding, so a
    /// protected view can never render (or redirect) off the pre-hydration
    /// logged-out default.
    pub async fn check(&self, path: &str) -> GuardDecision {
        if !Self::is_protected(path) {
            return GuardDecision::Render;
        }

        self.session.wait_hydrated().await;

        if self.session.is_authenticated().await {
            GuardDecision::Render
        } else {
            tracing::debug!(path, "Unauthenticated access to protected view, redirecting");
            GuardDecision::Redirect {
                to: "/".to_string(),
                replace: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_prefixes() {
        assert!(RouteGuard::is_protected("/tasks/2"));
        assert!(RouteGuard::is_protected("/timer/3"));
        assert!(RouteGuard::is_protected("/nutrition/4"));
        assert!(!RouteGuard::is_protected("/"));
        assert!(!RouteGuard::is_protected("/dashboard/1"));
    }
}
