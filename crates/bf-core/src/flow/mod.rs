//! Screen flow domain.
//!
//! The four-screen controller (landing, disclaimer, decoder, paywall) is a
//! pure state machine; the session orchestrator in the application layer
//! feeds it events and executes the actions it emits.

mod action;
mod event;
mod state;
mod state_machine;

pub use action::FlowAction;
pub use event::FlowEvent;
pub use state::FlowState;
pub use state_machine::FlowStateMachine;
