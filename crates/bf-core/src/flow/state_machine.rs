//! Screen flow state machine.
//!
//! Defines a pure state transition function for the four-screen flow.

use crate::flow::{FlowAction, FlowEvent, FlowState};

/// Pure flow state machine: no side effects, no IO.
pub struct FlowStateMachine;

impl FlowStateMachine {
    pub fn transition(state: FlowState, event: FlowEvent) -> (FlowState, Vec<FlowAction>) {
        match (state, event) {
            (FlowState::Landing, FlowEvent::StartRequested) => {
                (FlowState::disclaimer(), Vec::new())
            }
            (FlowState::Disclaimer { .. }, FlowEvent::BackRequested) => {
                (FlowState::Landing, Vec::new())
            }
            (FlowState::Disclaimer { .. }, FlowEvent::IdentityConfirmed) => {
                (FlowState::Decoder, vec![FlowAction::CaptureLead])
            }
            (FlowState::Disclaimer { .. }, FlowEvent::TrialNoticeRaised) => (
                FlowState::Disclaimer { trial_notice: true },
                Vec::new(),
            ),
            (FlowState::Decoder, FlowEvent::SubmitWhileBlocked) => {
                // The decode client is never contacted on a blocked submit.
                (FlowState::Paywall, Vec::new())
            }
            (FlowState::Decoder, FlowEvent::DecodeCompleted { is_crisis, premium }) => {
                // Crisis sessions are free and unlimited; premium never
                // consumes the trial.
                let actions = if !is_crisis && !premium {
                    vec![FlowAction::MarkTrialConsumed]
                } else {
                    Vec::new()
                };
                (FlowState::Decoder, actions)
            }
            (FlowState::Decoder, FlowEvent::DecodeFailed) => (FlowState::Decoder, Vec::new()),
            (
                FlowState::Decoder,
                FlowEvent::ResetRequested {
                    crisis,
                    gate_blocked,
                    premium,
                },
            ) => {
                if crisis {
                    return (FlowState::Decoder, vec![FlowAction::ClearResult]);
                }
                if gate_blocked && !premium {
                    return (FlowState::Paywall, Vec::new());
                }
                (FlowState::Decoder, vec![FlowAction::ClearResult])
            }
            (FlowState::Paywall, FlowEvent::CheckoutRequested) => {
                (FlowState::Paywall, vec![FlowAction::OpenCheckout])
            }
            (FlowState::Paywall, FlowEvent::PaywallDismissed) => {
                (FlowState::Landing, Vec::new())
            }
            (_, FlowEvent::PaymentReturnDetected) => {
                (FlowState::Decoder, vec![FlowAction::PersistPremium])
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowAction, FlowEvent, FlowState, FlowStateMachine};

    #[test]
    fn landing_start_transitions_to_disclaimer() {
        let (next, actions) =
            FlowStateMachine::transition(FlowState::Landing, FlowEvent::StartRequested);
        assert_eq!(next, FlowState::disclaimer());
        assert!(actions.is_empty());
    }

    #[test]
    fn disclaimer_confirm_captures_lead_and_enters_decoder() {
        let (next, actions) =
            FlowStateMachine::transition(FlowState::disclaimer(), FlowEvent::IdentityConfirmed);
        assert_eq!(next, FlowState::Decoder);
        assert_eq!(actions, vec![FlowAction::CaptureLead]);
    }

    #[test]
    fn blocked_identity_raises_trial_notice_and_stays() {
        let (next, actions) =
            FlowStateMachine::transition(FlowState::disclaimer(), FlowEvent::TrialNoticeRaised);
        assert_eq!(next, FlowState::Disclaimer { trial_notice: true });
        assert!(actions.is_empty());
    }

    #[test]
    fn blocked_submit_routes_to_paywall_without_actions() {
        let (next, actions) =
            FlowStateMachine::transition(FlowState::Decoder, FlowEvent::SubmitWhileBlocked);
        assert_eq!(next, FlowState::Paywall);
        assert!(actions.is_empty());
    }

    #[test]
    fn non_crisis_decode_marks_trial_consumed() {
        let (next, actions) = FlowStateMachine::transition(
            FlowState::Decoder,
            FlowEvent::DecodeCompleted {
                is_crisis: false,
                premium: false,
            },
        );
        assert_eq!(next, FlowState::Decoder);
        assert_eq!(actions, vec![FlowAction::MarkTrialConsumed]);
    }

    #[test]
    fn crisis_decode_never_marks_trial_consumed() {
        let (_, actions) = FlowStateMachine::transition(
            FlowState::Decoder,
            FlowEvent::DecodeCompleted {
                is_crisis: true,
                premium: false,
            },
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn premium_decode_never_marks_trial_consumed() {
        let (_, actions) = FlowStateMachine::transition(
            FlowState::Decoder,
            FlowEvent::DecodeCompleted {
                is_crisis: false,
                premium: true,
            },
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn reset_after_crisis_clears_in_place() {
        let (next, actions) = FlowStateMachine::transition(
            FlowState::Decoder,
            FlowEvent::ResetRequested {
                crisis: true,
                gate_blocked: true,
                premium: false,
            },
        );
        assert_eq!(next, FlowState::Decoder);
        assert_eq!(actions, vec![FlowAction::ClearResult]);
    }

    #[test]
    fn reset_when_blocked_routes_to_paywall() {
        let (next, actions) = FlowStateMachine::transition(
            FlowState::Decoder,
            FlowEvent::ResetRequested {
                crisis: false,
                gate_blocked: true,
                premium: false,
            },
        );
        assert_eq!(next, FlowState::Paywall);
        assert!(actions.is_empty());
    }

    #[test]
    fn reset_for_premium_clears_even_when_blocked() {
        let (next, actions) = FlowStateMachine::transition(
            FlowState::Decoder,
            FlowEvent::ResetRequested {
                crisis: false,
                gate_blocked: true,
                premium: true,
            },
        );
        assert_eq!(next, FlowState::Decoder);
        assert_eq!(actions, vec![FlowAction::ClearResult]);
    }

    #[test]
    fn paywall_dismiss_returns_to_landing() {
        let (next, actions) =
            FlowStateMachine::transition(FlowState::Paywall, FlowEvent::PaywallDismissed);
        assert_eq!(next, FlowState::Landing);
        assert!(actions.is_empty());
    }

    #[test]
    fn payment_return_forces_decoder_and_persists_premium() {
        let (next, actions) =
            FlowStateMachine::transition(FlowState::Landing, FlowEvent::PaymentReturnDetected);
        assert_eq!(next, FlowState::Decoder);
        assert_eq!(actions, vec![FlowAction::PersistPremium]);
    }

    #[test]
    fn unmatched_pairs_stay_in_place() {
        let (next, actions) =
            FlowStateMachine::transition(FlowState::Landing, FlowEvent::DecodeFailed);
        assert_eq!(next, FlowState::Landing);
        assert!(actions.is_empty());
    }
}
