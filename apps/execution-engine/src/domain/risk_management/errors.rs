//! Risk management errors.

use std::fmt;

/// Errors that can occur in risk validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// Constraint validation failed.
    ConstraintViolation {
        /// Violation code.
        code: String,
        /// Error message.
        message: String,
    },

    /// Insufficient buying power.
    InsufficientBuyingPower {
        /// Required amount.
        required: String,
        /// Available amount.
        available: String,
    },

    /// PDT violation.
    PdtViolation {
        /// Day trades remaining.
        day_trades_remaining: u8,
        /// Message.
        message: String,
    },

    /// Risk policy not found.
    PolicyNotFound {
        /// Policy ID.
        policy_id: String,
    },

    /// Invalid risk configuration.
    InvalidConfiguration {
        /// Configuration field.
        field: String,
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintViolation { code, message } => {
                write!(f, "Constraint violation [{code}]: {message}")
            }
            Self::InsufficientBuyingPower {
                required,
                available,
            } => {
                write!(
                    f,
                    "Insufficient buying power: required {required}, available {available}"
                )
            }
            Self::PdtViolation {
                day_trades_remaining,
                message,
            } => {
                write!(
                    f,
                    "PDT violation ({day_trades_remaining} day trades remaining): {message}"
                )
            }
            Self::PolicyNotFound { policy_id } => {
                write!(f, "Risk policy not found: {policy_id}")
            }
            Self::InvalidConfiguration { field, message } => {
                write!(f, "Invalid risk configuration [{field}]: {message}")
            }
        }
    }
}

impl std::error::Error for RiskError {}
