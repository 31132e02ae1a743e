//! Option Spread Leg Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OptionContract;
use crate::domain::risk_management::value_objects::Greeks;

/// Position side (long or short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

impl PositionSide {
    /// Get the sign multiplier for this side.
    #[must_use]
    pub const fn sign(&self) -> i32 {
        match self {
            Self::Long => 1,
            Self::Short => -1,
        }
    }

    /// Check if this is a long position.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }

    /// Check if this is a short position.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        matches!(self, Self::Short)
    }
}

/// Leg type in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegType {
    /// Primary/anchor leg.
    Primary,
    /// Secondary leg (e.g., short strike in vertical).
    Secondary,
    /// Wing leg (e.g., in butterfly/condor).
    Wing,
    /// Body leg (e.g., middle strikes in butterfly).
    Body,
}

/// A single leg of an options spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// The option contract.
    contract: OptionContract,
    /// Position side.
    side: PositionSide,
    /// Number of contracts.
    quantity: Decimal,
    /// Role of this leg in the spread (primary, secondary, wing, body).
    kind: LegType,
    /// Current Greeks for this leg.
    greeks: Greeks,
}

impl Leg {
    /// Create a new leg.
    #[must_use]
    pub const fn new(
        contract: OptionContract,
        side: PositionSide,
        quantity: Decimal,
        kind: LegType,
    ) -> Self {
        Self {
            contract,
            side,
            quantity,
            kind,
            greeks: Greeks::ZERO,
        }
    }

    /// Create a long leg.
    #[must_use]
    pub const fn long(contract: OptionContract, quantity: Decimal, kind: LegType) -> Self {
        Self::new(contract, PositionSide::Long, quantity, kind)
    }

    /// Create a short leg.
    #[must_use]
    pub const fn short(contract: OptionContract, quantity: Decimal, kind: LegType) -> Self {
        Self::new(contract, PositionSide::Short, quantity, kind)
    }

    /// Get the contract.
    #[must_use]
    pub const fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Get the position side.
    #[must_use]
    pub const fn side(&self) -> PositionSide {
        self.side
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Get the leg kind (role in spread).
    #[must_use]
    pub const fn kind(&self) -> LegType {
        self.kind
    }

    /// Get the Greeks.
    #[must_use]
    pub const fn greeks(&self) -> &Greeks {
        &self.greeks
    }

    /// Update the Greeks.
    pub const fn update_greeks(&mut self, greeks: Greeks) {
        self.greeks = greeks;
    }

    /// Get signed quantity (positive for long, negative for short).
    #[must_use]
    pub fn signed_quantity(&self) -> Decimal {
        self.quantity * Decimal::from(self.side.sign())
    }

    /// Calculate position Greeks (adjusted for quantity and side).
    #[must_use]
    pub fn position_greeks(&self) -> Greeks {
        self.greeks.scale(self.signed_quantity())
    }

    /// Calculate notional exposure.
    #[must_use]
    pub fn notional(&self, underlying_price: Decimal) -> Decimal {
        self.contract.notional(underlying_price, self.quantity) * Decimal::from(self.side.sign())
    }
}
