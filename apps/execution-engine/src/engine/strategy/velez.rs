//! Velez signal strategy: SMA-convergence entry, 3-state trailing stop,
//! max-run exit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_execution::value_objects::{OrderSide, OrderType};
use crate::domain::shared::{Money, Symbol, Timestamp};
use crate::engine::candle::{body_pct, Candle};
use crate::engine::config::StrategyConfig;
use crate::engine::indicators::IndicatorSet;

use super::{OpenPosition, Signal, Strategy};

/// Trailing-stop automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailState {
    /// Waiting for the first pullback (red bar).
    Watching,
    /// In a pullback; tracking its low, counting green bars to confirm.
    PullingBack,
    /// Pullback confirmed; stop has moved to the pullback low.
    Trailing,
}

fn is_green(candle: &Candle) -> bool {
    candle.close > candle.open
}

fn is_doji(candle: &Candle, doji_threshold_pct: f64) -> bool {
    body_pct(candle)
        .try_into()
        .map(|pct: f64| pct < doji_threshold_pct)
        .unwrap_or(false)
}

fn is_strong(candle: &Candle, strong_threshold_pct: f64) -> bool {
    is_green(candle)
        && body_pct(candle)
            .try_into()
            .map(|pct: f64| pct >= strong_threshold_pct)
            .unwrap_or(false)
}

/// One instance per `(strategy, symbol)` pair. Carries the mutable trailing
/// stop state; reset via [`Strategy::on_position_closed`].
pub struct VelezStrategy {
    symbol: Symbol,
    config: StrategyConfig,
    trail_state: TrailState,
    pullback_low: Option<Money>,
    green_count: u32,
    strong_run_count: u32,
}

impl VelezStrategy {
    /// Build a strategy instance for `symbol`.
    #[must_use]
    pub fn new(symbol: Symbol, config: StrategyConfig) -> Self {
        Self {
            symbol,
            config,
            trail_state: TrailState::Watching,
            pullback_low: None,
            green_count: 0,
            strong_run_count: 0,
        }
    }

    /// Current trailing-stop automaton state (for inspection/tests).
    #[must_use]
    pub fn trail_state(&self) -> TrailState {
        self.trail_state
    }
}

impl Strategy for VelezStrategy {
    fn should_long(&self, candle: &Candle, indicators: &IndicatorSet) -> bool {
        if indicators.bar_count < self.config.sma_slow {
            return false;
        }
        let (Some(fast), Some(slow), Some(prev_fast), Some(prev_slow)) = (
            indicators.sma_fast,
            indicators.sma_slow,
            indicators.prev_sma_fast,
            indicators.prev_sma_slow,
        ) else {
            return false;
        };

        let close: f64 = match candle.close.amount().try_into() {
            Ok(c) => c,
            Err(_) => return false,
        };
        if close <= 0.0 {
            return false;
        }

        let tightness_pct = (fast - slow).abs() / close * 100.0;
        if tightness_pct >= self.config.tightness_threshold_pct {
            return false;
        }

        let gap_widening = (fast - slow) > (prev_fast - prev_slow);
        if !gap_widening {
            return false;
        }

        if fast <= slow {
            return false;
        }

        is_strong(candle, self.config.strong_candle_body_pct)
    }

    fn build_signal(&self, candle: &Candle) -> Signal {
        let entry_price = candle.high;
        let buffer_pct = candle.low.amount() * self.config.stop_buffer_pct;
        let buffer = buffer_pct.max(self.config.stop_buffer_min);
        let stop_loss_price = Money::new(candle.low.amount() - buffer);
        Signal {
            symbol: self.symbol.clone(),
            side: OrderSide::Buy,
            entry_price,
            stop_loss_price,
            order_type: OrderType::Stop,
            strategy_name: "velez",
            timestamp: candle.timestamp,
        }
    }

    fn should_cancel_pending(&self, candles_since_submit: u32) -> bool {
        candles_since_submit >= self.config.buy_stop_expiry_candles
    }

    fn should_update_stop(&mut self, candle: &Candle, _position: &OpenPosition) -> Option<Money> {
        if is_doji(candle, self.config.doji_threshold_pct) {
            return None;
        }
        let green = is_green(candle);

        match self.trail_state {
            TrailState::Watching => {
                if !green {
                    self.trail_state = TrailState::PullingBack;
                    self.pullback_low = Some(candle.low);
                    self.green_count = 0;
                }
                None
            }
            TrailState::PullingBack => {
                if green {
                    self.green_count += 1;
                    if self.green_count >= 2 {
                        self.trail_state = TrailState::Trailing;
                        return self.pullback_low;
                    }
                } else {
                    self.pullback_low = Some(match self.pullback_low {
                        Some(low) => low.min(candle.low),
                        None => candle.low,
                    });
                    self.green_count = 0;
                }
                None
            }
            TrailState::Trailing => {
                if !green {
                    self.trail_state = TrailState::Watching;
                    self.pullback_low = None;
                    self.green_count = 0;
                }
                None
            }
        }
    }

    fn should_exit(&mut self, candle: &Candle) -> bool {
        if self.trail_state != TrailState::Trailing {
            self.strong_run_count = 0;
            return false;
        }
        if is_doji(candle, self.config.doji_threshold_pct) {
            self.strong_run_count = 0;
            return false;
        }
        if is_strong(candle, self.config.strong_candle_body_pct) {
            self.strong_run_count += 1;
        } else {
            self.strong_run_count = 0;
        }
        self.strong_run_count >= self.config.max_run_candles
    }

    fn on_position_closed(&mut self) {
        self.trail_state = TrailState::Watching;
        self.pullback_low = None;
        self.green_count = 0;
        self.strong_run_count = 0;
    }

    fn required_history(&self) -> usize {
        self.config.sma_slow
    }
}
