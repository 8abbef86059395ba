//! Events that drive the screen flow.

/// Events that drive the screen flow.
///
/// Events carry externally-computed facts (gate status, premium, crisis),
/// keeping the transition function pure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlowEvent {
    /// User starts from the landing page.
    StartRequested,
    /// Navigate back from the disclaimer.
    BackRequested,
    /// Intake confirmed; identity may proceed to the decoder.
    IdentityConfirmed,
    /// Intake confirmed by a blocked, non-premium identity: raise the usage
    /// notice instead of proceeding.
    TrialNoticeRaised,
    /// Submit attempted while the gate is blocked for a non-premium user.
    SubmitWhileBlocked,
    /// Decode finished successfully.
    DecodeCompleted { is_crisis: bool, premium: bool },
    /// Decode failed (transport, empty, or malformed reply).
    DecodeFailed,
    /// Reset requested after a result is on screen.
    ResetRequested {
        crisis: bool,
        gate_blocked: bool,
        premium: bool,
    },
    /// User asked for the external checkout page.
    CheckoutRequested,
    /// Paywall dismissed.
    PaywallDismissed,
    /// `payment=success` observed on page load.
    PaymentReturnDetected,
}
