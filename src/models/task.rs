//! Task list model.

use serde::{Deserialize, Serialize};

/// A to-do item persisted under the `tasks` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque id (epoch millis plus a counter suffix)
    pub id: String,
    pub title: String,
    pub done: bool,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}
