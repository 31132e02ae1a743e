//! Signal-generating strategies.
//!
//! A [`Strategy`] is the pure decision core the order manager and backtest
//! runner drive identically. One instance exists per `(strategy, symbol)`
//! pair; state resets via [`Strategy::on_position_closed`] when a round-trip
//! closes.

pub mod velez;

use rust_decimal::Decimal;

use crate::domain::order_execution::value_objects::{OrderSide, OrderType};
use crate::domain::shared::{Money, Symbol, Timestamp};
use crate::engine::candle::Candle;
use crate::engine::indicators::IndicatorSet;

pub use velez::{TrailState, VelezStrategy};

/// An actionable long/short signal produced by a strategy.
#[derive(Debug, Clone)]
pub struct Signal {
    /// Instrument to trade.
    pub symbol: Symbol,
    /// Buy (long entry) or sell (short entry, currently unused).
    pub side: OrderSide,
    /// Price at which to place the entry order.
    pub entry_price: Money,
    /// Initial protective stop price.
    pub stop_loss_price: Money,
    /// Order type for the entry (buy-stop for the reference strategy).
    pub order_type: OrderType,
    /// Name identifying which strategy produced this signal.
    pub strategy_name: &'static str,
    /// When the signal was generated.
    pub timestamp: Timestamp,
}

/// An open position's state, as seen by the strategy for exit decisions.
#[derive(Debug, Clone, Copy)]
pub struct OpenPosition {
    /// Quantity held.
    pub qty: Decimal,
    /// Average entry price.
    pub entry_price: Money,
    /// Current protective stop price.
    pub stop_price: Money,
}

/// The decision-making contract every signal strategy implements.
pub trait Strategy {
    /// Whether a new long entry should be placed on this candle.
    fn should_long(&self, candle: &Candle, indicators: &IndicatorSet) -> bool;

    /// Build the entry + initial stop prices for a long signal.
    fn build_signal(&self, candle: &Candle) -> Signal;

    /// Whether a still-pending entry should be canceled as expired.
    fn should_cancel_pending(&self, candles_since_submit: u32) -> bool;

    /// Whether the trailing stop should move, and to what price.
    fn should_update_stop(
        &mut self,
        candle: &Candle,
        position: &OpenPosition,
    ) -> Option<Money>;

    /// Whether the position should be closed on a max-run exit.
    fn should_exit(&mut self, candle: &Candle) -> bool;

    /// Reset all per-position state after a round-trip closes.
    fn on_position_closed(&mut self);

    /// Minimum number of warm candles required before this strategy can
    /// produce a signal.
    fn required_history(&self) -> usize;
}
