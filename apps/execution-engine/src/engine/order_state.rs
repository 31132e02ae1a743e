//! Order lifecycle state machine.
//!
//! Pure, synchronous, no I/O. Every transition is validated here before the
//! caller is allowed to persist it, so an invalid sequence of broker events
//! can never corrupt an [`OrderRecord`](crate::engine::order_record::OrderRecord).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Created locally, not yet acknowledged by the adapter.
    PendingSubmit,
    /// Adapter accepted the submit call; broker has not yet confirmed.
    Submitted,
    /// Broker confirmed the order is live.
    Accepted,
    /// Broker reported a fill covering less than the full quantity.
    PartiallyFilled,
    /// Broker reported the full quantity filled.
    Filled,
    /// Broker confirmed cancellation.
    Canceled,
    /// Order expired unfilled (e.g. day order at market close).
    Expired,
    /// Broker rejected the order.
    Rejected,
    /// The submit call itself failed (network, auth, validation).
    SubmitFailed,
}

impl OrderState {
    /// Returns true once no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Filled | Self::Canceled | Self::Expired | Self::Rejected | Self::SubmitFailed
        )
    }

    /// Returns true if the order is still working at the broker.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// States from which a cancel request is meaningful.
    #[must_use]
    pub const fn is_cancelable(&self) -> bool {
        matches!(self, Self::Submitted | Self::Accepted | Self::PartiallyFilled)
    }

    /// The states `to` may legally be reached from `self`.
    #[must_use]
    pub const fn valid_next_states(&self) -> &'static [Self] {
        match self {
            Self::PendingSubmit => &[Self::Submitted, Self::SubmitFailed],
            Self::Submitted => &[
                Self::Accepted,
                Self::Rejected,
                Self::Filled,
                Self::Canceled,
                Self::Expired,
            ],
            Self::Accepted => &[
                Self::PartiallyFilled,
                Self::Filled,
                Self::Canceled,
                Self::Expired,
            ],
            Self::PartiallyFilled => &[Self::PartiallyFilled, Self::Filled, Self::Canceled],
            Self::Filled
            | Self::Canceled
            | Self::Expired
            | Self::Rejected
            | Self::SubmitFailed => &[],
        }
    }

    /// Returns true if `self -> to` is a legal transition.
    #[must_use]
    pub fn is_valid_transition(&self, to: Self) -> bool {
        self.valid_next_states().contains(&to)
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PendingSubmit => write!(f, "PENDING_SUBMIT"),
            Self::Submitted => write!(f, "SUBMITTED"),
            Self::Accepted => write!(f, "ACCEPTED"),
            Self::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            Self::Filled => write!(f, "FILLED"),
            Self::Canceled => write!(f, "CANCELED"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::Rejected => write!(f, "REJECTED"),
            Self::SubmitFailed => write!(f, "SUBMIT_FAILED"),
        }
    }
}

/// Error returned when a transition is attempted that the table forbids.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid order transition: {from} -> {to}")]
pub struct InvalidTransitionError {
    /// State the order was in.
    pub from: OrderState,
    /// State that was requested.
    pub to: OrderState,
}

/// Stateless validator for [`OrderState`] transitions.
///
/// `OrderStateMachine` carries no data of its own; every method is an
/// associated function operating on states passed in by the caller, which
/// owns the actual [`OrderRecord`](crate::engine::order_record::OrderRecord).
pub struct OrderStateMachine;

impl OrderStateMachine {
    /// Validate a transition without mutating anything.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransitionError`] if `from -> to` is not in the
    /// transition table.
    pub fn validate_transition(from: OrderState, to: OrderState) -> Result<(), InvalidTransitionError> {
        if from.is_valid_transition(to) {
            Ok(())
        } else {
            Err(InvalidTransitionError { from, to })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_submit_allows_submitted_or_submit_failed() {
        assert!(OrderState::PendingSubmit.is_valid_transition(OrderState::Submitted));
        assert!(OrderState::PendingSubmit.is_valid_transition(OrderState::SubmitFailed));
        assert!(!OrderState::PendingSubmit.is_valid_transition(OrderState::Filled));
    }

    #[test]
    fn submitted_allows_accepted_rejected_filled_canceled_expired() {
        for to in [
            OrderState::Accepted,
            OrderState::Rejected,
            OrderState::Filled,
            OrderState::Canceled,
            OrderState::Expired,
        ] {
            assert!(OrderState::Submitted.is_valid_transition(to), "{to}");
        }
        assert!(!OrderState::Submitted.is_valid_transition(OrderState::PartiallyFilled));
    }

    #[test]
    fn accepted_allows_partial_fill_fill_cancel_expire() {
        assert!(OrderState::Accepted.is_valid_transition(OrderState::PartiallyFilled));
        assert!(OrderState::Accepted.is_valid_transition(OrderState::Filled));
        assert!(OrderState::Accepted.is_valid_transition(OrderState::Canceled));
        assert!(OrderState::Accepted.is_valid_transition(OrderState::Expired));
        assert!(!OrderState::Accepted.is_valid_transition(OrderState::Rejected));
    }

    #[test]
    fn partially_filled_self_loops_and_terminates_via_fill_or_cancel() {
        assert!(OrderState::PartiallyFilled.is_valid_transition(OrderState::PartiallyFilled));
        assert!(OrderState::PartiallyFilled.is_valid_transition(OrderState::Filled));
        assert!(OrderState::PartiallyFilled.is_valid_transition(OrderState::Canceled));
        assert!(!OrderState::PartiallyFilled.is_valid_transition(OrderState::Expired));
    }

    #[test]
    fn terminal_states_absorb_everything() {
        for terminal in [
            OrderState::Filled,
            OrderState::Canceled,
            OrderState::Expired,
            OrderState::Rejected,
            OrderState::SubmitFailed,
        ] {
            assert!(terminal.is_terminal());
            assert!(terminal.valid_next_states().is_empty());
            for to in [OrderState::Submitted, OrderState::Accepted, OrderState::Filled] {
                assert!(!terminal.is_valid_transition(to));
            }
        }
    }

    #[test]
    fn validate_transition_ok_and_err() {
        assert!(OrderStateMachine::validate_transition(
            OrderState::PendingSubmit,
            OrderState::Submitted
        )
        .is_ok());

        let err =
            OrderStateMachine::validate_transition(OrderState::Filled, OrderState::Canceled)
                .unwrap_err();
        assert_eq!(err.from, OrderState::Filled);
        assert_eq!(err.to, OrderState::Canceled);
    }

    #[test]
    fn is_cancelable_matches_active_working_states() {
        assert!(OrderState::Submitted.is_cancelable());
        assert!(OrderState::Accepted.is_cancelable());
        assert!(OrderState::PartiallyFilled.is_cancelable());
        assert!(!OrderState::PendingSubmit.is_cancelable());
        assert!(!OrderState::Filled.is_cancelable());
    }

    #[test]
    fn display_matches_serde_tag() {
        assert_eq!(format!("{}", OrderState::PartiallyFilled), "PARTIALLY_FILLED");
        let json = serde_json::to_string(&OrderState::SubmitFailed).unwrap();
        assert_eq!(json, "\"SUBMIT_FAILED\"");
    }

    #[test]
    fn any_walk_from_pending_submit_stays_valid_or_rejects() {
        let walk = [
            OrderState::Submitted,
            OrderState::Accepted,
            OrderState::PartiallyFilled,
            OrderState::PartiallyFilled,
            OrderState::Filled,
        ];
        let mut state = OrderState::PendingSubmit;
        for next in walk {
            OrderStateMachine::validate_transition(state, next).unwrap();
            state = next;
        }
        assert_eq!(state, OrderState::Filled);
        assert!(OrderStateMachine::validate_transition(state, OrderState::Canceled).is_err());
    }
}
