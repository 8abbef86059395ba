//! Pure view models, one per screen.
//!
//! Each view is a function of the session context only; no view owns
//! logic or state of its own. Cosmetic cycling (loading messages, rotating
//! placeholder prompts, the landing boot log) is exposed as pure index
//! functions so the host shell owns every timer and nothing here can leak
//! a callback into a discarded view.

use bf_core::{DecoderResponse, FlowState};

use crate::session::SessionContext;

/// Messages cycled while a decode request is in flight.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Establishing secure link...",
    "Accessing Kayela Memory Core...",
    "Detecting ego resistance...",
    "Applying Radical Responsibility filter...",
    "Synthesizing truth...",
    "Calibrating response...",
];

/// Prompts rotated through the input placeholder.
pub const PLACEHOLDER_PROMPTS: [&str; 4] = [
    "What conversation are you avoiding?",
    "What decision are you delaying?",
    "Where are you pretending to be confused?",
    "Dump the raw data here...",
];

/// Boot-log lines typed out on the landing page.
pub const BOOT_LOG: [&str; 6] = [
    "LOADING_CORE_MEMORY...",
    "BYPASSING_EGO_DEFENSES...",
    "CALIBRATING_TRUTH_VECTORS...",
    "SYSTEM_ONLINE",
    "AWAITING_INPUT",
    "SYSTEM_ONLINE",
];

/// Crisis resource number surfaced on the crisis card.
pub const CRISIS_HOTLINE: &str = "988";

/// Loading message for the given tick, wrapping around the sequence.
pub fn loading_message(step: usize) -> &'static str {
    LOADING_MESSAGES[step % LOADING_MESSAGES.len()]
}

/// Placeholder prompt for the given rotation index, wrapping around.
pub fn placeholder_prompt(index: usize) -> &'static str {
    PLACEHOLDER_PROMPTS[index % PLACEHOLDER_PROMPTS.len()]
}

/// Usage indicator shown in the decoder header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalStatus {
    /// Premium: the gate never applies.
    Unlimited,
    /// Free trial consumed.
    LimitReached,
    /// Free trial still available.
    TrialActive,
}

/// The rendered screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Landing(LandingView),
    Disclaimer(DisclaimerView),
    Decoder(DecoderView),
    /// Overlay: the decoder stays rendered underneath.
    Paywall(PaywallView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingView {
    pub boot_log: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclaimerView {
    /// Show the "identity has already utilized the free session" notice.
    pub trial_notice: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderView {
    pub greeting: String,
    pub status: SignalStatus,
    pub loading: bool,
    pub error: Option<String>,
    pub body: DecoderBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderBody {
    /// Input prompt, no result on screen.
    Prompt { input: String },
    /// A normal decode result.
    Result(ResultView),
    /// A crisis result: safety resources instead of the reading.
    Crisis(CrisisView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub lens: String,
    pub insight: String,
    pub directive: String,
    pub inquiry: String,
    /// Plain-text rendering for the copy-transmission button.
    pub transmission: String,
    /// The reset control advertises the paywall instead of a fresh decode.
    pub locked_reset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisView {
    pub headline: &'static str,
    pub message: String,
    pub hotline: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaywallView {
    /// Decoder content underneath the overlay, still logically active.
    pub underlying: DecoderView,
}

/// Render the current screen from the session context.
pub fn render(ctx: &SessionContext) -> ScreenView {
    match &ctx.state {
        FlowState::Landing => ScreenView::Landing(LandingView {
            boot_log: &BOOT_LOG,
        }),
        FlowState::Disclaimer { trial_notice } => ScreenView::Disclaimer(DisclaimerView {
            trial_notice: *trial_notice,
        }),
        FlowState::Decoder => ScreenView::Decoder(decoder_view(ctx)),
        FlowState::Paywall => ScreenView::Paywall(PaywallView {
            underlying: decoder_view(ctx),
        }),
    }
}

fn decoder_view(ctx: &SessionContext) -> DecoderView {
    let greeting = match &ctx.user {
        Some(user) => format!("Welcome, {}.", user.name),
        None => "Welcome.".to_string(),
    };
    let status = if ctx.is_premium() {
        SignalStatus::Unlimited
    } else if ctx.trial_exhausted {
        SignalStatus::LimitReached
    } else {
        SignalStatus::TrialActive
    };
    let body = match &ctx.result {
        None => DecoderBody::Prompt {
            input: ctx.input.clone(),
        },
        Some(result) if result.is_crisis => DecoderBody::Crisis(CrisisView {
            headline: "PROTOCOL ALERT",
            message: result.practical_task.clone(),
            hotline: CRISIS_HOTLINE,
        }),
        Some(result) => DecoderBody::Result(ResultView {
            lens: result.philosophical_lens.clone(),
            insight: result.insight.clone(),
            directive: result.practical_task.clone(),
            inquiry: result.follow_up_prompt.clone(),
            transmission: transmission_text(result),
            locked_reset: ctx.trial_exhausted && !ctx.is_premium(),
        }),
    };
    DecoderView {
        greeting,
        status,
        loading: ctx.loading,
        error: ctx.error.clone(),
        body,
    }
}

fn transmission_text(result: &DecoderResponse) -> String {
    format!(
        "BREAKFEAR DECODER\n\nINSIGHT: {}\n\nDIRECTIVE: {}\n\nINQUIRY: {}",
        result.insight, result.practical_task, result.follow_up_prompt
    )
}
