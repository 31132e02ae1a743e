//! Error taxonomy for the trading engine core.
//!
//! Every variant here is either a boundary error surfaced by a
//! [`BrokerAdapter`](crate::engine::adapter::BrokerAdapter) implementation or
//! a core-internal failure the order manager / reconciler / risk gate can
//! raise. `anyhow` is reserved for the outermost orchestration layer (the
//! backtest runner's `run()`, process entry points); everything below that
//! returns one of these precise types.

use crate::engine::order_state::{InvalidTransitionError, OrderState};

/// Errors an adapter implementation may return for any broker call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BrokerError {
    /// Could not establish or maintain a connection to the broker.
    #[error("broker connection error: {0}")]
    Connection(String),
    /// Credentials were rejected or missing.
    #[error("broker authentication error: {0}")]
    Auth(String),
    /// The broker's API returned a non-success response.
    #[error("broker API error (status {status}): {message}")]
    Api {
        /// HTTP-like status code reported by the broker.
        status: u16,
        /// Message from the broker response body.
        message: String,
    },
    /// The call exceeded its deadline.
    #[error("broker call timed out after {0:?}")]
    Timeout(std::time::Duration),
    /// A call was made while not connected.
    #[error("adapter is not connected")]
    NotConnected,
}

/// Errors raised by the trading engine core itself.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// Adapter call failed.
    #[error(transparent)]
    Broker(#[from] BrokerError),
    /// Attempted an order transition the state machine forbids.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransitionError),
    /// Referenced an order that does not exist in the repository.
    #[error("order not found: {0}")]
    OrderNotFound(String),
    /// Startup reconciliation could not establish broker truth; the process
    /// must not proceed to trade with unknown state.
    #[error("reconciliation failed fatally: {0}")]
    ReconciliationFatal(String),
    /// A `TradeRecord` could not be constructed from its legs.
    #[error("invalid trade: {0}")]
    InvalidTrade(String),
    /// The persisted audit log rejected a mutation of an append-only row.
    #[error("append-only violation: {0}")]
    AppendOnlyViolation(String),
}

impl EngineError {
    /// Convenience constructor mirroring the state machine's own error.
    #[must_use]
    pub fn invalid_transition(from: OrderState, to: OrderState) -> Self {
        Self::InvalidTransition(InvalidTransitionError { from, to })
    }
}
