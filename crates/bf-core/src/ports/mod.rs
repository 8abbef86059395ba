//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core business logic
//! independent of storage and transport details.

pub mod decode;
pub mod kv_store;
pub mod lead_capture;

pub use decode::{DecodeError, DecodePort};
pub use kv_store::KeyValueStorePort;
pub use lead_capture::LeadCapturePort;
