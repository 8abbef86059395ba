//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use bf_core::ports::KeyValueStorePort;

/// In-memory [`KeyValueStorePort`] implementation.
///
/// The fake the gate and backup logic are tested against; nothing survives
/// the process.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, for tests that start mid-lifecycle.
    pub fn seeded(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.lock().unwrap();
            for (k, v) in entries {
                values.insert((*k).to_string(), (*v).to_string());
            }
        }
        store
    }
}

#[async_trait]
impl KeyValueStorePort for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
