//! Risk, strategy, and backtest configuration sections.
//!
//! Each section follows the teacher's config idiom: `#[serde(default)]`
//! fields plus a `validate()` method the owning caller runs before using
//! the section, rather than trusting deserialized input blindly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Risk sizing and circuit-breaker thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Percentage of equity risked on one trade.
    pub max_risk_per_trade_pct: Decimal,
    /// Absolute ceiling on per-trade risk budget.
    pub max_risk_per_trade_abs: Decimal,
    /// Cap on position value as a fraction of equity.
    pub max_position_pct: Decimal,
    /// Circuit-breaker daily loss trip threshold, as a fraction of equity.
    pub max_daily_loss_pct: Decimal,
    /// Maximum number of simultaneously open (non-terminal entry) positions.
    pub max_open_positions: u32,
    /// Consecutive losing trades that pause trading for the day.
    pub consecutive_loss_pause: u32,
    /// Discount from entry price used for the reconciler's emergency stop.
    pub emergency_stop_pct: Decimal,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            max_risk_per_trade_pct: dec!(0.01),
            max_risk_per_trade_abs: dec!(1000),
            max_position_pct: dec!(0.25),
            max_daily_loss_pct: dec!(0.03),
            max_open_positions: 3,
            consecutive_loss_pause: 3,
            emergency_stop_pct: dec!(0.02),
        }
    }
}

/// Error returned by [`RiskConfig::validate`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid risk config: {0}")]
pub struct RiskConfigError(pub String);

impl RiskConfig {
    /// Reject out-of-range thresholds before the engine starts.
    ///
    /// # Errors
    ///
    /// Returns [`RiskConfigError`] if any percentage is not in `(0, 1]` or
    /// any count is zero.
    pub fn validate(&self) -> Result<(), RiskConfigError> {
        for (name, value) in [
            ("max_risk_per_trade_pct", self.max_risk_per_trade_pct),
            ("max_position_pct", self.max_position_pct),
            ("max_daily_loss_pct", self.max_daily_loss_pct),
            ("emergency_stop_pct", self.emergency_stop_pct),
        ] {
            if value <= Decimal::ZERO || value > Decimal::ONE {
                return Err(RiskConfigError(format!("{name} must be in (0, 1], got {value}")));
            }
        }
        if self.max_risk_per_trade_abs <= Decimal::ZERO {
            return Err(RiskConfigError("max_risk_per_trade_abs must be positive".into()));
        }
        if self.max_open_positions == 0 {
            return Err(RiskConfigError("max_open_positions must be at least 1".into()));
        }
        if self.consecutive_loss_pause == 0 {
            return Err(RiskConfigError("consecutive_loss_pause must be at least 1".into()));
        }
        Ok(())
    }
}

/// Velez strategy and candle-aggregation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Fast SMA window, in candles.
    pub sma_fast: usize,
    /// Slow SMA window, in candles.
    pub sma_slow: usize,
    /// SMA convergence threshold, as a percentage of close.
    pub tightness_threshold_pct: f64,
    /// Minimum candle body percentage to count as "strong".
    pub strong_candle_body_pct: f64,
    /// Percentage buffer below `bar.low` for the initial stop.
    pub stop_buffer_pct: Decimal,
    /// Minimum absolute buffer below `bar.low` for the initial stop.
    pub stop_buffer_min: Decimal,
    /// Candles after which an unfilled buy-stop entry is canceled.
    pub buy_stop_expiry_candles: u32,
    /// Consecutive strong/trailing candles after which the position exits.
    pub max_run_candles: u32,
    /// Maximum candle body percentage to count as a doji.
    pub doji_threshold_pct: f64,
    /// Aggregation interval in minutes; must be one of `{1, 2, 5, 10}`.
    pub candle_interval_minutes: i64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            sma_fast: 9,
            sma_slow: 18,
            tightness_threshold_pct: 0.3,
            strong_candle_body_pct: 60.0,
            stop_buffer_pct: dec!(0.001),
            stop_buffer_min: dec!(0.02),
            buy_stop_expiry_candles: 3,
            max_run_candles: 5,
            doji_threshold_pct: 10.0,
            candle_interval_minutes: 2,
        }
    }
}

impl StrategyConfig {
    /// Reject configurations that would be inconsistent or unsupported.
    ///
    /// # Errors
    ///
    /// Returns [`RiskConfigError`] if `candle_interval_minutes` is not one
    /// of `{1, 2, 5, 10}` or `sma_fast >= sma_slow`.
    pub fn validate(&self) -> Result<(), RiskConfigError> {
        if ![1, 2, 5, 10].contains(&self.candle_interval_minutes) {
            return Err(RiskConfigError(format!(
                "candle_interval_minutes must be 1, 2, 5, or 10, got {}",
                self.candle_interval_minutes
            )));
        }
        if self.sma_fast == 0 || self.sma_slow == 0 || self.sma_fast >= self.sma_slow {
            return Err(RiskConfigError("sma_fast must be positive and less than sma_slow".into()));
        }
        Ok(())
    }
}

/// Backtest-only parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktestConfig {
    /// Per-share slippage applied to every simulated fill.
    pub slippage_per_share: Decimal,
    /// Starting cash for a run.
    pub initial_equity: Decimal,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            slippage_per_share: dec!(0.01),
            initial_equity: dec!(25000),
        }
    }
}
