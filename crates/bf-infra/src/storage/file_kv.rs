//! File-backed key-value store
//!
//! Persists the flag map as a single JSON object file in the application
//! data directory, standing in for the browser-local store of the hosted
//! variant. Writes go through a temp file and rename so the store is
//! either the previous contents or the fully written new contents.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use bf_core::ports::KeyValueStorePort;

pub const DEFAULT_STORE_FILE: &str = ".breakfear_flags";

pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store with the default filename under `base_dir`.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_STORE_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create flag store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn load(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read flag store failed: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("parse flag store failed: {}", self.path.display()))
    }

    async fn atomic_write(&self, values: &HashMap<String, String>) -> Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(values).context("serialize flag store failed")?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)
            .await
            .with_context(|| format!("write temp flag store failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp flag store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load().await?;
        values.insert(key.to_string(), value.to_string());
        self.atomic_write(&values).await
    }
}
