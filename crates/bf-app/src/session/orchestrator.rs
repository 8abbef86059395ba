//! Session orchestrator.
//!
//! Coordinates the flow state machine and its side effects: gate checks
//! before each submission, the single in-flight decode request, trial
//! accounting, lead capture and the payment-return unlock.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use bf_core::checkout::{checkout_url, is_payment_return_url, strip_payment_param};
use bf_core::ports::{DecodePort, KeyValueStorePort, LeadCapturePort};
use bf_core::trial;
use bf_core::{DecoderResponse, FlowAction, FlowEvent, FlowState, FlowStateMachine, UserInfo};

use crate::session::context::{SessionContext, DECODE_ERROR_MESSAGE};
use crate::usecases::{CaptureLead, CheckTrialGate, MarkTrialConsumed, UnlockPremium};

/// Errors produced by the session orchestrator.
///
/// Only the flag store can fail here; decode failures are collapsed into
/// the generic message and never escape as errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("flag store failed: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input, or submit arrived outside the decoder screen.
    Ignored,
    /// A decode request is already in flight; no second request was issued.
    AlreadyPending,
    /// The gate was blocked; the paywall is up and the decode client was
    /// never contacted.
    RoutedToPaywall,
    /// Decode succeeded.
    Decoded(DecoderResponse),
    /// Decode failed; the generic error message is set and input preserved.
    Failed,
}

/// Orchestrator that drives the screen flow.
pub struct SessionOrchestrator {
    context: Mutex<SessionContext>,
    decoder: Arc<dyn DecodePort>,
    check_gate: CheckTrialGate,
    mark_consumed: MarkTrialConsumed,
    capture_lead: CaptureLead,
    unlock_premium: UnlockPremium,
    store: Arc<dyn KeyValueStorePort>,
    checkout_base: String,
}

impl SessionOrchestrator {
    pub fn new(
        store: Arc<dyn KeyValueStorePort>,
        decoder: Arc<dyn DecodePort>,
        lead: Arc<dyn LeadCapturePort>,
        checkout_base: impl Into<String>,
    ) -> Self {
        Self {
            context: Mutex::new(SessionContext::default()),
            decoder,
            check_gate: CheckTrialGate::new(store.clone()),
            mark_consumed: MarkTrialConsumed::new(store.clone()),
            capture_lead: CaptureLead::new(store.clone(), lead),
            unlock_premium: UnlockPremium::new(store.clone()),
            store,
            checkout_base: checkout_base.into(),
        }
    }

    /// Snapshot of the current session context.
    pub async fn context(&self) -> SessionContext {
        self.context.lock().await.clone()
    }

    /// Load-time entry point.
    ///
    /// Detects a payment return in the page URL, persists the premium
    /// unlock, restores (or synthesizes) the user, and returns the cleaned
    /// URL the host must replace so a refresh does not replay the unlock.
    /// Without a payment return, restores a premium session from the backup
    /// if one exists.
    pub async fn initialize(&self, page_url: &str) -> Result<Option<String>, SessionError> {
        let backup = self.read_backup().await?;

        if is_payment_return_url(page_url) {
            self.unlock_premium.execute().await?;

            let mut user = backup.unwrap_or_else(UserInfo::traveler);
            user.is_premium = true;
            let status = self.check_gate.execute(Some(&user.email)).await?;

            let mut ctx = self.context.lock().await;
            // PersistPremium already ran above; the transition is what
            // forces the decoder screen.
            Self::apply(&mut ctx, FlowEvent::PaymentReturnDetected);
            ctx.user = Some(user);
            ctx.trial_exhausted = status.consumed;
            return Ok(Some(strip_payment_param(page_url)));
        }

        if self.check_gate.is_premium().await? {
            if let Some(mut user) = backup {
                user.is_premium = true;
                let status = self.check_gate.execute(Some(&user.email)).await?;
                let mut ctx = self.context.lock().await;
                ctx.user = Some(user);
                ctx.trial_exhausted = status.consumed;
            }
        }
        Ok(None)
    }

    /// Landing screen: start the flow.
    pub async fn start(&self) -> FlowState {
        let mut ctx = self.context.lock().await;
        Self::apply(&mut ctx, FlowEvent::StartRequested);
        ctx.state.clone()
    }

    /// Disclaimer screen: navigate back.
    pub async fn back(&self) -> FlowState {
        let mut ctx = self.context.lock().await;
        Self::apply(&mut ctx, FlowEvent::BackRequested);
        ctx.state.clone()
    }

    /// Disclaimer screen: confirm the intake form.
    ///
    /// A blocked, non-premium identity first sees the usage notice;
    /// confirming again proceeds so the paywall inside the decoder stays
    /// reachable. Proceeding stores the backup and pushes the lead.
    pub async fn confirm_identity(&self, info: UserInfo) -> Result<FlowState, SessionError> {
        let status = self.check_gate.execute(Some(&info.email)).await?;

        let actions;
        let confirmed;
        {
            let mut ctx = self.context.lock().await;
            let noticed = matches!(
                ctx.state,
                FlowState::Disclaimer { trial_notice: true }
            );
            if status.blocks() && !noticed {
                Self::apply(&mut ctx, FlowEvent::TrialNoticeRaised);
                return Ok(ctx.state.clone());
            }

            let mut info = info;
            info.is_premium = status.premium;
            actions = Self::apply(&mut ctx, FlowEvent::IdentityConfirmed);
            ctx.trial_exhausted = status.consumed;
            ctx.user = Some(info.clone());
            confirmed = (info, ctx.state.clone());
        }

        let (info, state) = confirmed;
        if actions.contains(&FlowAction::CaptureLead) {
            self.capture_lead.execute(&info).await?;
        }
        Ok(state)
    }

    /// Decoder screen: submit one fear input.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, SessionError> {
        let email = {
            let mut ctx = self.context.lock().await;
            if ctx.loading {
                return Ok(SubmitOutcome::AlreadyPending);
            }
            if ctx.state != FlowState::Decoder {
                return Ok(SubmitOutcome::Ignored);
            }
            // Reserve the in-flight slot before any await so a concurrent
            // submit can never issue a second request.
            ctx.loading = true;
            ctx.user.as_ref().map(|u| u.email.clone())
        };

        let status = match self.check_gate.execute(email.as_deref()).await {
            Ok(status) => status,
            Err(e) => {
                self.context.lock().await.loading = false;
                return Err(e.into());
            }
        };

        if status.blocks() {
            let mut ctx = self.context.lock().await;
            ctx.loading = false;
            ctx.trial_exhausted = status.consumed;
            Self::apply(&mut ctx, FlowEvent::SubmitWhileBlocked);
            return Ok(SubmitOutcome::RoutedToPaywall);
        }

        if text.trim().is_empty() {
            self.context.lock().await.loading = false;
            return Ok(SubmitOutcome::Ignored);
        }

        {
            let mut ctx = self.context.lock().await;
            ctx.input = text.to_string();
            ctx.error = None;
        }

        let decoded = self.decoder.decode(text).await;

        let mut ctx = self.context.lock().await;
        ctx.loading = false;
        match decoded {
            Ok(response) => {
                let actions = Self::apply(
                    &mut ctx,
                    FlowEvent::DecodeCompleted {
                        is_crisis: response.is_crisis,
                        premium: status.premium,
                    },
                );
                ctx.result = Some(response.clone());
                if actions.contains(&FlowAction::MarkTrialConsumed) {
                    ctx.trial_exhausted = true;
                    drop(ctx);
                    self.mark_consumed.execute(email.as_deref()).await?;
                }
                Ok(SubmitOutcome::Decoded(response))
            }
            Err(e) => {
                // One generic message for transport, empty and malformed
                // failures alike; the existing input stays for retry.
                warn!(error = %e, "decode failed");
                ctx.error = Some(DECODE_ERROR_MESSAGE.to_string());
                Self::apply(&mut ctx, FlowEvent::DecodeFailed);
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Decoder screen: reset after a result.
    ///
    /// Crisis results always clear in place. A normal result with the gate
    /// now blocked routes to the paywall instead of a fresh input screen.
    pub async fn reset(&self) -> Result<FlowState, SessionError> {
        let (email, crisis) = {
            let ctx = self.context.lock().await;
            (
                ctx.user.as_ref().map(|u| u.email.clone()),
                ctx.result.as_ref().is_some_and(|r| r.is_crisis),
            )
        };
        let status = self.check_gate.execute(email.as_deref()).await?;

        let mut ctx = self.context.lock().await;
        let actions = Self::apply(
            &mut ctx,
            FlowEvent::ResetRequested {
                crisis,
                gate_blocked: status.consumed,
                premium: status.premium,
            },
        );
        if actions.contains(&FlowAction::ClearResult) {
            ctx.result = None;
            ctx.input.clear();
            ctx.error = None;
        }
        ctx.trial_exhausted = status.consumed;
        Ok(ctx.state.clone())
    }

    /// Paywall: dismiss the overlay.
    pub async fn dismiss_paywall(&self) -> FlowState {
        let mut ctx = self.context.lock().await;
        Self::apply(&mut ctx, FlowEvent::PaywallDismissed);
        ctx.state.clone()
    }

    /// Paywall: request the external checkout page.
    ///
    /// Returns the URL the host must navigate to, pre-filled with the
    /// user's email when one is known. `None` when checkout is not
    /// available from the current screen.
    pub async fn checkout(&self) -> Option<String> {
        let mut ctx = self.context.lock().await;
        let actions = Self::apply(&mut ctx, FlowEvent::CheckoutRequested);
        if !actions.contains(&FlowAction::OpenCheckout) {
            return None;
        }
        let email = ctx
            .user
            .as_ref()
            .map(|u| u.email.as_str())
            .filter(|e| !e.trim().is_empty());
        Some(checkout_url(&self.checkout_base, email))
    }

    fn apply(ctx: &mut SessionContext, event: FlowEvent) -> Vec<FlowAction> {
        let (next, actions) = FlowStateMachine::transition(ctx.state.clone(), event);
        debug!(state = ?next, ?actions, "flow transition");
        ctx.state = next;
        actions
    }

    async fn read_backup(&self) -> Result<Option<UserInfo>, SessionError> {
        let Some(raw) = self.store.get(trial::USER_BACKUP_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "discarding unreadable user backup");
                Ok(None)
            }
        }
    }
}
