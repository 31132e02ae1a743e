//! Risk validation context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Exposure, Greeks};
use crate::domain::shared::{InstrumentId, Money, Quantity};

/// Context for risk validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskContext {
    /// Account equity.
    pub equity: Money,
    /// Available buying power.
    pub buying_power: Money,
    /// Cash available.
    pub cash: Money,
    /// Current portfolio exposure.
    pub current_exposure: Exposure,
    /// Current portfolio Greeks.
    pub current_greeks: Greeks,
    /// Current positions by instrument.
    pub positions: HashMap<String, PositionContext>,
    /// Pending orders by instrument.
    pub pending_orders: HashMap<String, PendingOrderContext>,
    /// PDT status.
    pub pdt_status: PdtStatus,
    /// Day trades remaining (if PDT restricted).
    pub day_trades_remaining: u8,
}

impl RiskContext {
    /// Create a new risk context.
    #[must_use]
    pub fn new(equity: Money, buying_power: Money) -> Self {
        Self {
            equity,
            buying_power,
            cash: Money::ZERO,
            current_exposure: Exposure::default(),
            current_greeks: Greeks::default(),
            positions: HashMap::new(),
            pending_orders: HashMap::new(),
            pdt_status: PdtStatus::NotApplicable,
            day_trades_remaining: 0,
        }
    }

    /// Add a position to the context.
    pub fn add_position(&mut self, instrument_id: impl Into<String>, position: PositionContext) {
        self.positions.insert(instrument_id.into(), position);
    }

    /// Add a pending order to the context.
    pub fn add_pending_order(
        &mut self,
        instrument_id: impl Into<String>,
        order: PendingOrderContext,
    ) {
        self.pending_orders.insert(instrument_id.into(), order);
    }

    /// Get position for an instrument.
    #[must_use]
    pub fn get_position(&self, instrument_id: &str) -> Option<&PositionContext> {
        self.positions.get(instrument_id)
    }

    /// Calculate total pending notional.
    #[must_use]
    pub fn total_pending_notional(&self) -> Money {
        self.pending_orders
            .values()
            .fold(Money::ZERO, |acc, o| acc + o.notional)
    }
}

/// Position context for a single instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionContext {
    /// Instrument ID.
    pub instrument_id: InstrumentId,
    /// Current quantity (negative for short).
    pub quantity: Quantity,
    /// Market value.
    pub market_value: Money,
    /// Cost basis.
    pub cost_basis: Money,
    /// Unrealized P&L.
    pub unrealized_pnl: Money,
    /// Greeks (for options).
    pub greeks: Option<Greeks>,
}

impl PositionContext {
    /// Create a new position context.
    #[must_use]
    pub fn new(
        instrument_id: InstrumentId,
        quantity: Quantity,
        market_value: Money,
        cost_basis: Money,
    ) -> Self {
        let unrealized_pnl = market_value - cost_basis;
        Self {
            instrument_id,
            quantity,
            market_value,
            cost_basis,
            unrealized_pnl,
            greeks: None,
        }
    }

    /// Add Greeks to the position.
    #[must_use]
    pub const fn with_greeks(mut self, greeks: Greeks) -> Self {
        self.greeks = Some(greeks);
        self
    }

    /// Check if this is a long position.
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.quantity.amount() > rust_decimal::Decimal::ZERO
    }

    /// Check if this is a short position.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.quantity.amount() < rust_decimal::Decimal::ZERO
    }
}

/// Pending order context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOrderContext {
    /// Instrument ID.
    pub instrument_id: InstrumentId,
    /// Order quantity.
    pub quantity: Quantity,
    /// Estimated notional value.
    pub notional: Money,
    /// Is this a buy order?
    pub is_buy: bool,
}

/// PDT (Pattern Day Trader) status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PdtStatus {
    /// Not applicable (account equity >= $25,000 or cash account).
    #[default]
    NotApplicable,
    /// PDT restricted (under $25,000 equity).
    Restricted,
    /// PDT flagged (exceeded day trade limit).
    Flagged,
}

impl PdtStatus {
    /// Check if PDT restricted.
    #[must_use]
    pub const fn is_restricted(&self) -> bool {
        matches!(self, Self::Restricted | Self::Flagged)
    }
}
