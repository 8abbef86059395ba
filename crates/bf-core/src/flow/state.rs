//! Screen flow states.

/// Screen flow state.
///
/// The single driver of which view is rendered. Decoder content (input,
/// result, error, loading) lives in the session context rather than in a
/// variant, because the paywall renders as an overlay with the decoder
/// still active underneath it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlowState {
    /// Landing page.
    Landing,
    /// Disclaimer / intake form.
    Disclaimer {
        /// A blocked, non-premium identity sees a usage notice on its first
        /// confirm attempt; confirming again proceeds so the paywall stays
        /// reachable.
        trial_notice: bool,
    },
    /// Decoder screen.
    Decoder,
    /// Paywall overlay. The decoder underneath remains logically active.
    Paywall,
}

impl FlowState {
    /// Fresh disclaimer state without a usage notice.
    pub fn disclaimer() -> Self {
        Self::Disclaimer {
            trial_notice: false,
        }
    }
}
