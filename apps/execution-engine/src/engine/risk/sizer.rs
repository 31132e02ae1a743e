//! Stop-distance / risk-amount position sizer.
//!
//! Derives quantity purely from how far the stop sits from the entry and
//! how much of the account is allowed to be risked on that distance, not
//! from a flat notional or equity-percentage allocation.

use rust_decimal::Decimal;

use crate::domain::shared::Money;
use crate::engine::config::RiskConfig;

/// Outcome of a sizing attempt. `qty == 0` always carries a `reason`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizingResult {
    /// Whole shares to buy. Zero means the trade should not be placed.
    pub qty: u64,
    /// Dollar amount actually at risk for `qty` shares at `stop_distance`.
    pub risk_amount: Money,
    /// `|entry - stop|`.
    pub stop_distance: Money,
    /// `qty * entry_price`.
    pub position_value: Money,
    /// Human-readable explanation, always set when `qty == 0`.
    pub reason: Option<String>,
}

impl SizingResult {
    fn rejected(reason: impl Into<String>) -> Self {
        Self {
            qty: 0,
            risk_amount: Money::ZERO,
            stop_distance: Money::ZERO,
            position_value: Money::ZERO,
            reason: Some(reason.into()),
        }
    }
}

/// Pure position sizer: given account figures and a candidate entry/stop,
/// derives the whole-share quantity to buy.
pub struct PositionSizer;

impl PositionSizer {
    /// Run the sizing algorithm.
    ///
    /// Steps (exact order matters for the scenarios this is tested
    /// against): stop distance -> risk budget -> raw qty from risk budget
    /// -> clamp to max position value -> buying power floor -> clamp to
    /// buying power.
    #[must_use]
    pub fn size(
        equity: Money,
        buying_power: Money,
        entry_price: Money,
        stop_loss_price: Money,
        config: &RiskConfig,
    ) -> SizingResult {
        let entry = entry_price.amount();
        let stop_distance = (entry - stop_loss_price.amount()).abs();

        if stop_distance.is_zero() || entry <= Decimal::ZERO {
            return SizingResult::rejected("zero stop distance or non-positive entry price");
        }

        let risk_amount = (equity.amount() * config.max_risk_per_trade_pct)
            .min(config.max_risk_per_trade_abs);

        let raw_qty = (risk_amount / stop_distance).floor();
        if raw_qty < Decimal::ONE {
            return SizingResult::rejected("risk budget too small for this stop distance");
        }

        let max_by_position_value = (equity.amount() * config.max_position_pct / entry).floor();
        let mut qty = raw_qty.min(max_by_position_value);

        if buying_power.amount() < entry {
            return SizingResult::rejected("insufficient buying power");
        }

        let max_by_buying_power = (buying_power.amount() / entry).floor();
        qty = qty.min(max_by_buying_power);

        if qty < Decimal::ONE {
            return SizingResult::rejected("clamped to zero");
        }

        let qty_u64 = qty.try_into().unwrap_or(0u64);
        SizingResult {
            qty: qty_u64,
            risk_amount: Money::new(qty * stop_distance),
            stop_distance: Money::new(stop_distance),
            position_value: Money::new(qty * entry),
            reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> RiskConfig {
        RiskConfig {
            max_risk_per_trade_pct: dec!(0.01),
            max_risk_per_trade_abs: dec!(1000),
            max_position_pct: dec!(0.25),
            max_daily_loss_pct: dec!(0.03),
            max_open_positions: 3,
            consecutive_loss_pause: 3,
            emergency_stop_pct: dec!(0.02),
        }
    }

    #[test]
    fn happy_path_sizing_bound_by_max_position_pct() {
        // risk budget allows 100 shares (100/1.00); the 25% position-value
        // cap (2500/50.00 = 50) binds first.
        let result = PositionSizer::size(
            Money::new(dec!(10000)),
            Money::new(dec!(10000)),
            Money::new(dec!(50.00)),
            Money::new(dec!(49.00)),
            &config(),
        );
        assert_eq!(result.qty, 50);
        assert!(result.reason.is_none());
        assert_eq!(result.stop_distance, Money::new(dec!(1.00)));
        assert_eq!(result.position_value, Money::new(dec!(2500.00)));
    }

    #[test]
    fn zero_stop_distance_is_rejected() {
        let result = PositionSizer::size(
            Money::new(dec!(25000)),
            Money::new(dec!(25000)),
            Money::new(dec!(100)),
            Money::new(dec!(100)),
            &config(),
        );
        assert_eq!(result.qty, 0);
        assert!(result.reason.is_some());
    }

    #[test]
    fn insufficient_buying_power_is_rejected() {
        let result = PositionSizer::size(
            Money::new(dec!(25000)),
            Money::new(dec!(50)),
            Money::new(dec!(155.20)),
            Money::new(dec!(154.70)),
            &config(),
        );
        assert_eq!(result.qty, 0);
        assert_eq!(result.reason.as_deref(), Some("insufficient buying power"));
    }

    #[test]
    fn qty_never_exceeds_buying_power() {
        let result = PositionSizer::size(
            Money::new(dec!(1_000_000)),
            Money::new(dec!(200)),
            Money::new(dec!(100)),
            Money::new(dec!(99)),
            &config(),
        );
        assert!(Decimal::from(result.qty) * dec!(100) <= dec!(200));
    }

    #[test]
    fn risk_amount_never_exceeds_configured_budget_plus_one_share_rounding() {
        let cfg = config();
        let result = PositionSizer::size(
            Money::new(dec!(25000)),
            Money::new(dec!(25000)),
            Money::new(dec!(155.20)),
            Money::new(dec!(154.70)),
            &cfg,
        );
        let budget = (dec!(25000) * cfg.max_risk_per_trade_pct).min(cfg.max_risk_per_trade_abs);
        assert!(result.risk_amount.amount() <= budget + dec!(0.50));
    }

    #[test]
    fn position_value_capped_by_max_position_pct() {
        let result = PositionSizer::size(
            Money::new(dec!(25000)),
            Money::new(dec!(1_000_000)),
            Money::new(dec!(10)),
            Money::new(dec!(9.99)),
            &config(),
        );
        assert!(result.position_value.amount() <= dec!(25000) * dec!(0.25) + dec!(10));
    }
}
