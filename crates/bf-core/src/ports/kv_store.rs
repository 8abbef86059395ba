//! Key-value store port - abstracts the browser-local flag store
//!
//! All durable state in this application is a handful of flat string flags
//! plus one JSON backup blob. This port is the single seam over that store,
//! so the gate and backup logic can be tested against an in-memory fake.

use anyhow::Result;
use async_trait::async_trait;

/// Key-value store port.
///
/// Reads and writes are treated as always succeeding by the flow logic;
/// a storage fault surfaces through the `Result` but has no recovery path.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Get the value stored under `key`, or `None` when unset.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set `key` to `value`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
