//! Reasons for order rejection and cancellation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason for order rejection from broker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RejectReason {
    /// Rejection code from broker.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl RejectReason {
    /// Create a new reject reason.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Insufficient buying power.
    #[must_use]
    pub fn insufficient_buying_power() -> Self {
        Self::new(
            "INSUFFICIENT_BUYING_POWER",
            "Insufficient buying power for order",
        )
    }

    /// Invalid symbol.
    #[must_use]
    pub fn invalid_symbol(symbol: &str) -> Self {
        Self::new("INVALID_SYMBOL", format!("Invalid symbol: {symbol}"))
    }

    /// Invalid quantity.
    #[must_use]
    pub fn invalid_quantity(reason: &str) -> Self {
        Self::new("INVALID_QUANTITY", format!("Invalid quantity: {reason}"))
    }

    /// Invalid price.
    #[must_use]
    pub fn invalid_price(reason: &str) -> Self {
        Self::new("INVALID_PRICE", format!("Invalid price: {reason}"))
    }

    /// Market closed.
    #[must_use]
    pub fn market_closed() -> Self {
        Self::new("MARKET_CLOSED", "Market is closed")
    }

    /// Rate limited.
    #[must_use]
    pub fn rate_limited() -> Self {
        Self::new("RATE_LIMITED", "Rate limit exceeded")
    }

    /// Unknown broker error.
    #[must_use]
    pub fn broker_error(message: impl Into<String>) -> Self {
        Self::new("BROKER_ERROR", message)
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Reason for order cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CancelReason {
    /// Cancellation code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl CancelReason {
    /// Create a new cancel reason.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// User requested cancellation.
    #[must_use]
    pub fn user_requested() -> Self {
        Self::new("USER_REQUESTED", "Canceled by user request")
    }

    /// System timeout.
    #[must_use]
    pub fn timeout() -> Self {
        Self::new("TIMEOUT", "Order timed out waiting for fill")
    }

    /// Partial fill timeout.
    #[must_use]
    pub fn partial_fill_timeout() -> Self {
        Self::new(
            "PARTIAL_FILL_TIMEOUT",
            "Partial fill timeout - canceling remainder",
        )
    }

    /// Risk limit triggered.
    #[must_use]
    pub fn risk_limit(limit: &str) -> Self {
        Self::new("RISK_LIMIT", format!("Risk limit triggered: {limit}"))
    }

    /// Stop triggered.
    #[must_use]
    pub fn stop_triggered() -> Self {
        Self::new("STOP_TRIGGERED", "Stop level triggered")
    }

    /// End of day.
    #[must_use]
    pub fn end_of_day() -> Self {
        Self::new("END_OF_DAY", "Day order canceled at end of trading day")
    }

    /// Disconnect safety.
    #[must_use]
    pub fn disconnect_safety() -> Self {
        Self::new("DISCONNECT_SAFETY", "Canceled due to broker disconnect")
    }

    /// Replaced by new order.
    #[must_use]
    pub fn replaced() -> Self {
        Self::new("REPLACED", "Order replaced with new order")
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
