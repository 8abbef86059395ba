//! Breakfear Decoder Application Layer
//!
//! This crate contains the business-logic use cases, the session
//! orchestrator that drives the screen flow, and the pure view models.

pub mod session;
pub mod usecases;
pub mod views;

pub use session::{SessionContext, SessionError, SessionOrchestrator, SubmitOutcome};
