//! Order purpose for determining timeout policies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order purpose for timeout policy selection.
///
/// Different order types have different urgency levels:
/// - Entry orders can wait longer for better fills
/// - Stop-loss orders need immediate execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPurpose {
    /// Entry order (opening a position).
    Entry,
    /// Exit order (closing a position for profit/loss).
    Exit,
    /// Stop-loss order (protective exit).
    StopLoss,
    /// Take-profit order.
    TakeProfit,
    /// Bracket leg (OCO-attached order).
    BracketLeg,
    /// Scale-in order (adding to position).
    ScaleIn,
    /// Scale-out order (partial exit).
    ScaleOut,
}

impl OrderPurpose {
    /// Returns true if this is an entry-type order.
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        matches!(self, Self::Entry | Self::ScaleIn)
    }

    /// Returns true if this is an exit-type order.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(
            self,
            Self::Exit | Self::StopLoss | Self::TakeProfit | Self::ScaleOut | Self::BracketLeg
        )
    }

    /// Returns true if this is a protective order (urgent execution).
    #[must_use]
    pub const fn is_protective(&self) -> bool {
        matches!(self, Self::StopLoss)
    }

    /// Returns the relative urgency level (1-10, higher = more urgent).
    #[must_use]
    pub const fn urgency_level(&self) -> u8 {
        match self {
            Self::StopLoss => 10,  // Maximum urgency
            Self::TakeProfit => 7, // High urgency
            Self::Exit => 6,       // Medium-high urgency
            Self::BracketLeg => 5, // Medium urgency
            Self::ScaleOut => 4,   // Medium-low urgency
            Self::Entry => 2,      // Low urgency
            Self::ScaleIn => 1,    // Lowest urgency
        }
    }
}

impl Default for OrderPurpose {
    fn default() -> Self {
        Self::Entry
    }
}

impl fmt::Display for OrderPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry => write!(f, "ENTRY"),
            Self::Exit => write!(f, "EXIT"),
            Self::StopLoss => write!(f, "STOP_LOSS"),
            Self::TakeProfit => write!(f, "TAKE_PROFIT"),
            Self::BracketLeg => write!(f, "BRACKET_LEG"),
            Self::ScaleIn => write!(f, "SCALE_IN"),
            Self::ScaleOut => write!(f, "SCALE_OUT"),
        }
    }
}
