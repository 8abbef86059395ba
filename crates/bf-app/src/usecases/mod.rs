//! Application use cases.

pub mod capture_lead;
pub mod check_trial_gate;
pub mod mark_trial_consumed;
pub mod unlock_premium;

pub use capture_lead::CaptureLead;
pub use check_trial_gate::{CheckTrialGate, GateStatus};
pub use mark_trial_consumed::MarkTrialConsumed;
pub use unlock_premium::UnlockPremium;
