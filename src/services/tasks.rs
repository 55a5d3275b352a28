// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted task list.
//!
//! The whole list lives under one `tasks` key as a JSON array. Store
//! failures follow the usual policy: reads degrade to an empty list, writes
//! are best effort.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::Task;
use crate::store::{keys, Store};

pub struct TaskService {
    store: Store,
    // Disambiguates ids created within the same millisecond.
    id_counter: AtomicU64,
}

impl TaskService {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            id_counter: AtomicU64::new(0),
        }
    }

    /// Load the persisted task list, oldest first.
    pub async fn load(&self) -> Vec<Task> {
        match self.store.get::<Vec<Task>>(keys::TASKS).await {
            Ok(Some(tasks)) => tasks,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load tasks");
                Vec::new()
            }
        }
    }

    /// Append a new task and persist the list.
    pub async fn add(&self, title: &str) -> Task {
        let now = chrono::Utc::now();
        let task = Task {
            id: format!(
                "{}-{}",
                now.timestamp_millis(),
                self.id_counter.fetch_add(1, Ordering::Relaxed)
            ),
            title: title.to_string(),
            done: false,
            created_at: now.to_rfc3339(),
        };

        let mut tasks = self.load().await;
        tasks.push(task.clone());
        self.save(&tasks).await;
        task
    }

    /// Flip the done flag of the task with the given id.
    ///
    /// Returns whether a task was found.
    pub async fn toggle(&self, id: &str) -> bool {
        let mut tasks = self.load().await;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.done = !task.done;
        self.save(&tasks).await;
        true
    }

    /// Remove the task with the given id. Returns whether one was removed.
    pub async fn delete(&self, id: &str) -> bool {
        let mut tasks = self.load().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return false;
        }
        self.save(&tasks).await;
        true
    }

    async fn save(&self, tasks: &[Task]) {
        if let Err(e) = self.store.set(keys::TASKS, &tasks).await {
            tracing::warn!(error = %e, "Failed to persist tasks");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_toggle_delete_roundtrip() {
        let service = TaskService::new(Store::memory());

        let a = service.add("stretch").await;
        let b = service.add("hydrate").await;
        assert_ne!(a.id, b.id);

        assert!(service.toggle(&a.id).await);
        let tasks = service.load().await;
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].done);
        assert!(!tasks[1].done);

        assert!(service.delete(&a.id).await);
        assert!(!service.delete(&a.id).await);
        assert_eq!(service.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_broken_store_degrades_to_empty() {
        let service = TaskService::new(Store::broken());
        assert!(service.load().await.is_empty());
        assert!(!service.toggle("missing").await);
    }
}
