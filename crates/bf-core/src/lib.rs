//! # bf-core
//!
//! Core domain models and business logic for the Breakfear Decoder.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod checkout;
pub mod config;
pub mod decoder;
pub mod flow;
pub mod ports;
pub mod trial;
pub mod user;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use decoder::DecoderResponse;
pub use flow::{FlowAction, FlowEvent, FlowState, FlowStateMachine};
pub use user::UserInfo;
