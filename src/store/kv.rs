// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Asynchronous key-value store with typed operations.
//!
//! Three backends:
//! - file: a JSON object on disk, cached in memory and flushed on every write
//! - memory: cache only, for tests and ephemeral runs
//! - broken: every operation fails, for exercising failure policies

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// Key-value store client.
#[derive(Clone)]
pub struct Store {
    backend: Arc<Backend>,
}

enum Backend {
    File {
        path: PathBuf,
        cache: DashMap<String, serde_json::Value>,
        // Serializes snapshot writes so flushes cannot interleave.
        flush_lock: tokio::sync::Mutex<()>,
    },
    Memory(DashMap<String, serde_json::Value>),
    /// Reads succeed against a snapshot; writes and removes fail.
    ReadOnly(DashMap<String, serde_json::Value>),
    Broken,
}

impl Store {
    /// Open a file-backed store, loading any existing contents.
    ///
    /// A missing file is an empty store; parent directories are created.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let cache = DashMap::new();
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let map: BTreeMap<String, serde_json::Value> = serde_json::from_slice(&bytes)
                    .map_err(|e| {
                        AppError::Storage(format!("Corrupt store file {}: {}", path.display(), e))
                    })?;
                for (k, v) in map {
                    cache.insert(k, v);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        }

        tracing::info!(path = %path.display(), entries = cache.len(), "Store opened");

        Ok(Self {
            backend: Arc::new(Backend::File {
                path,
                cache,
                flush_lock: tokio::sync::Mutex::new(()),
            }),
        })
    }

    /// Create an in-memory store (nothing touches disk).
    pub fn memory() -> Self {
        Self {
            backend: Arc::new(Backend::Memory(DashMap::new())),
        }
    }

    /// Create a store where every operation fails.
    ///
    /// Used in tests to verify storage-failure policies.
    pub fn broken() -> Self {
        Self {
            backend: Arc::new(Backend::Broken),
        }
    }

    /// Snapshot this store into one where reads succeed but every write or
    /// remove fails. Used in tests to verify write-failure policies.
    pub fn frozen(&self) -> Self {
        let snapshot = DashMap::new();
        match &*self.backend {
            Backend::File { cache, .. } | Backend::Memory(cache) | Backend::ReadOnly(cache) => {
                for entry in cache.iter() {
                    snapshot.insert(entry.key().clone(), entry.value().clone());
                }
            }
            Backend::Broken => {}
        }
        Self {
            backend: Arc::new(Backend::ReadOnly(snapshot)),
        }
    }

    /// Read and deserialize the value stored under `key`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let value = match &*self.backend {
            Backend::File { cache, .. } | Backend::Memory(cache) | Backend::ReadOnly(cache) => {
                cache.get(key).map(|v| v.value().clone())
            }
            Backend::Broken => return Err(Self::unavailable()),
        };

        match value {
            Some(v) => serde_json::from_value(v).map(Some).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Malformed value at {}: {}", key, e))
            }),
            None => Ok(None),
        }
    }

    /// Serialize and store `value` under `key`.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let json = serde_json::to_value(value)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize {}: {}", key, e)))?;

        match &*self.backend {
            Backend::File { cache, .. } => {
                cache.insert(key.to_string(), json);
                self.flush().await
            }
            Backend::Memory(cache) => {
                cache.insert(key.to_string(), json);
                Ok(())
            }
            Backend::ReadOnly(_) | Backend::Broken => Err(Self::unavailable()),
        }
    }

    /// Remove the value stored under `key` (no-op if absent).
    pub async fn remove(&self, key: &str) -> Result<(), AppError> {
        match &*self.backend {
            Backend::File { cache, .. } => {
                cache.remove(key);
                self.flush().await
            }
            Backend::Memory(cache) => {
                cache.remove(key);
                Ok(())
            }
            Backend::ReadOnly(_) | Backend::Broken => Err(Self::unavailable()),
        }
    }

    /// Write the current cache snapshot to disk.
    async fn flush(&self) -> Result<(), AppError> {
        let Backend::File {
            path,
            cache,
            flush_lock,
        } = &*self.backend
        else {
            return Ok(());
        };

        let _guard = flush_lock.lock().await;

        let snapshot: BTreeMap<String, serde_json::Value> = cache
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        let bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize store: {}", e)))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::Storage(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        tokio::fs::write(path, bytes).await.map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn unavailable() -> AppError {
        AppError::Storage("Store not available".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_roundtrip() {
        let store = Store::memory();

        store.set("k", &vec![1u32, 2, 3]).await.unwrap();
        let got: Option<Vec<u32>> = store.get("k").await.unwrap();
        assert_eq!(got, Some(vec![1, 2, 3]));

        store.remove("k").await.unwrap();
        let gone: Option<Vec<u32>> = store.get("k").await.unwrap();
        assert_eq!(gone, None);
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = Store::memory();
        let got: Option<String> = store.get("absent").await.unwrap();
        assert_eq!(got, None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let store = Store::memory();
        assert!(store.remove("absent").await.is_ok());
    }

    #[tokio::test]
    async fn test_frozen_store_reads_but_rejects_writes() {
        let store = Store::memory();
        store.set("k", &"v".to_string()).await.unwrap();

        let frozen = store.frozen();
        let got: Option<String> = frozen.get("k").await.unwrap();
        assert_eq!(got, Some("v".to_string()));
        assert!(frozen.set("k", &"w".to_string()).await.is_err());
        assert!(frozen.remove("k").await.is_err());
    }

    #[tokio::test]
    async fn test_type_mismatch_is_internal_error() {
        let store = Store::memory();
        store.set("k", &"not a number".to_string()).await.unwrap();

        let err = store.get::<u32>("k").await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_broken_store_fails_every_op() {
        let store = Store::broken();

        assert!(store.get::<String>("k").await.is_err());
        assert!(store.set("k", &1u32).await.is_err());
        assert!(store.remove("k").await.is_err());
    }
}
