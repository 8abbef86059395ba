//! Side-effects produced by flow transitions.

/// Side-effects produced by state transitions.
///
/// Executed by the session orchestrator through the ports; the machine
/// itself performs none of them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlowAction {
    /// Push the intake record to the lead webhook (best-effort) after
    /// writing the local backup copy.
    CaptureLead,
    /// Mark the free trial consumed (device flag, plus email flag when
    /// an email is known).
    MarkTrialConsumed,
    /// Clear the current result and input for a fresh submission.
    ClearResult,
    /// Persist the permanent premium unlock flag.
    PersistPremium,
    /// Hand the external checkout URL to the host for navigation.
    OpenCheckout,
}
