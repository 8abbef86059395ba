//! Mutable session context.

use bf_core::{DecoderResponse, FlowState, UserInfo};

/// The one generic, user-visible decode failure message. Transport, empty
/// and malformed replies all collapse into it.
pub const DECODE_ERROR_MESSAGE: &str =
    "Connection disrupted. The Core could not process this input. Please refine and try again.";

/// In-memory session state.
///
/// Nothing here survives a page reload; the flow is re-entered from the
/// persisted flags alone. Decoder content lives here rather than in the
/// flow state so the paywall overlay keeps the decoder content underneath
/// it intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Current screen.
    pub state: FlowState,
    /// Identity captured at the disclaimer, if any.
    pub user: Option<UserInfo>,
    /// Current fear input. Preserved across a failed decode for retry.
    pub input: String,
    /// Result of the last successful decode, if any.
    pub result: Option<DecoderResponse>,
    /// Generic decode failure message, when the last submit failed.
    pub error: Option<String>,
    /// True while a decode request is in flight. Gates re-submission.
    pub loading: bool,
    /// Cached device/email usage state for rendering the status indicator.
    pub trial_exhausted: bool,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            state: FlowState::Landing,
            user: None,
            input: String::new(),
            result: None,
            error: None,
            loading: false,
            trial_exhausted: false,
        }
    }
}

impl SessionContext {
    /// Whether the current identity holds the premium unlock.
    pub fn is_premium(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_premium)
    }
}
