//! # bf-infra
//!
//! Infrastructure adapters for the Breakfear Decoder: the file-backed flag
//! store, the Gemini decode client, the lead webhook client, and
//! environment-based configuration loading.

pub mod config;
pub mod network;
pub mod storage;

pub use network::{GeminiDecodeClient, WebhookLeadClient};
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
