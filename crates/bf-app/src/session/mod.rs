//! Session orchestration.
//!
//! The orchestrator owns the session context, feeds user events into the
//! pure flow state machine, and executes the actions it emits through the
//! injected ports.

mod context;
mod orchestrator;

pub use context::{SessionContext, DECODE_ERROR_MESSAGE};
pub use orchestrator::{SessionError, SessionOrchestrator, SubmitOutcome};
