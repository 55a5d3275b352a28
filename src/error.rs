// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Storage failures are always caught at the call site, logged, and treated
//! as "no data" (reads) or "best effort, proceed" (writes/removes). Form
//! validation failures are not errors at all: they travel as per-field
//! message maps (see [`FieldErrors`]) so callers can render them inline.

use std::collections::BTreeMap;

/// Application error type.
///
/// `Storage` covers I/O faults of the backing store; `Internal` wraps codec
/// and other unexpected failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Per-field validation messages, keyed by field name.
///
/// A fresh map is built on every validation pass, so messages from an
/// earlier attempt are cleared implicitly by the next one.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, AppError>;
