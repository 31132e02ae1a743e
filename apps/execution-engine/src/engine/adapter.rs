//! Broker and data adapter contracts the engine core depends on.
//!
//! The core never talks to a concrete broker or data vendor. It is built
//! entirely against [`BrokerAdapter`] and [`DataAdapter`]; the live
//! implementation (REST/WebSocket plumbing) and the backtest
//! [`SimBroker`](crate::engine::backtest::sim_broker::SimBroker) are both
//! just trait objects from the core's point of view.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::order_execution::value_objects::{OrderSide, OrderType};
use crate::domain::shared::{Money, OrderId, Quantity, Symbol, Timestamp};
use crate::engine::candle::Bar;
use crate::engine::error::BrokerError;
use crate::engine::order_state::OrderState;

/// Everything needed to place one order with a broker.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Instrument to trade.
    pub symbol: Symbol,
    /// Buy or sell.
    pub side: OrderSide,
    /// Market / limit / stop / stop-limit.
    pub order_type: OrderType,
    /// Quantity requested.
    pub qty: Quantity,
    /// Limit price, required for limit and stop-limit orders.
    pub limit_price: Option<Money>,
    /// Stop price, required for stop and stop-limit orders.
    pub stop_price: Option<Money>,
    /// Day, GTC, etc. Expressed as a plain string; the adapter maps it.
    pub time_in_force: String,
}

/// A held position as reported by the broker.
#[derive(Debug, Clone)]
pub struct Position {
    /// Instrument held.
    pub symbol: Symbol,
    /// Quantity held (always positive; short selling is out of scope).
    pub qty: Quantity,
    /// Volume-weighted average entry price.
    pub avg_entry_price: Money,
    /// Current market value of the position.
    pub market_value: Money,
    /// Unrealized profit or loss.
    pub unrealized_pl: Money,
}

/// Account-level figures used by the risk gate and position sizer.
#[derive(Debug, Clone)]
pub struct AccountInfo {
    /// Total account equity.
    pub equity: Money,
    /// Cash immediately available for new positions.
    pub buying_power: Money,
    /// Cash balance.
    pub cash: Money,
}

/// Kind of asynchronous event the broker pushes about an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeUpdateKind {
    /// Order acknowledged by the exchange.
    New,
    /// Order is now live / accepted.
    Accepted,
    /// Full or partial fill.
    Fill,
    /// Partial fill (more quantity remains working).
    PartialFill,
    /// Order canceled.
    Canceled,
    /// Order rejected.
    Rejected,
    /// Order expired unfilled.
    Expired,
    /// Broker id was replaced (e.g. after a `replace_order` call).
    Replaced,
}

/// One asynchronous fact about an order, pushed from the broker.
#[derive(Debug, Clone)]
pub struct TradeUpdate {
    /// Broker-assigned id of the order this update concerns.
    pub broker_order_id: OrderId,
    /// What happened.
    pub kind: TradeUpdateKind,
    /// Cumulative filled quantity, if this update carries fill data.
    pub filled_qty: Option<Quantity>,
    /// Average fill price, if this update carries fill data.
    pub filled_avg_price: Option<Money>,
    /// New broker id, present only for `Replaced`.
    pub new_broker_order_id: Option<OrderId>,
    /// When the broker says this happened.
    pub timestamp: Timestamp,
}

/// The broker operations the engine core consumes.
///
/// Implementations MUST be `Send + Sync`: the order manager and reconciler
/// hold adapters behind `Arc` and call them from a single driving task, but
/// the adapter itself may run its transport on other threads.
#[async_trait]
pub trait BrokerAdapter: Send + Sync {
    /// Acquire whatever connection/session the adapter needs. Calling this
    /// more than once before `disconnect` must be a no-op.
    async fn connect(&self) -> Result<(), BrokerError>;

    /// Release the connection/session. Must be safe to call even if
    /// `connect` was never called.
    async fn disconnect(&self) -> Result<(), BrokerError>;

    /// Submit one order.
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderId, BrokerError>;

    /// Cancel a working order.
    async fn cancel_order(&self, broker_order_id: &OrderId) -> Result<(), BrokerError>;

    /// Replace quantity and/or prices on a working order.
    ///
    /// Returns a new broker id if the broker represents a replace as a
    /// cancel+new pair; returns the same id if it mutates in place.
    async fn replace_order(
        &self,
        broker_order_id: &OrderId,
        qty: Option<Quantity>,
        limit_price: Option<Money>,
        stop_price: Option<Money>,
    ) -> Result<OrderId, BrokerError>;

    /// Current status of one order.
    async fn get_order_status(&self, broker_order_id: &OrderId) -> Result<OrderState, BrokerError>;

    /// All currently held positions.
    async fn get_positions(&self) -> Result<Vec<Position>, BrokerError>;

    /// Account equity and buying power, fetched fresh (never cached).
    async fn get_account(&self) -> Result<AccountInfo, BrokerError>;

    /// All orders currently working at the broker.
    async fn get_open_orders(&self) -> Result<Vec<(OrderId, OrderState)>, BrokerError>;

    /// Orders placed in the last `since_hours` hours, terminal or not.
    async fn get_recent_orders(
        &self,
        since_hours: u32,
    ) -> Result<Vec<(OrderId, OrderState)>, BrokerError>;

    /// Subscribe to the single trade-update stream for this connection.
    ///
    /// At most one subscription is active per connection. The transport
    /// queue backing the returned receiver MUST be unbounded: trade updates
    /// are never dropped.
    async fn subscribe_trade_updates(
        &self,
    ) -> Result<tokio::sync::mpsc::UnboundedReceiver<TradeUpdate>, BrokerError>;

    /// Human-readable name for logging (e.g. `"alpaca"`, `"sim"`).
    fn broker_name(&self) -> &'static str;
}

/// Policy applied when a bounded bar queue is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOverflowPolicy {
    /// Drop the newest arrival and log at `error`/critical level.
    DropNewestLogCritical,
}

/// The market-data operations the engine core consumes.
#[async_trait]
pub trait DataAdapter: Send + Sync {
    /// Subscribe to a live bar stream for `symbols`.
    ///
    /// The returned channel MAY be bounded; on overflow the adapter MUST
    /// apply [`QueueOverflowPolicy::DropNewestLogCritical`] rather than
    /// block the producer or drop an older, already-queued bar.
    async fn subscribe_bars(
        &self,
        symbols: &[Symbol],
    ) -> Result<tokio::sync::mpsc::Receiver<Bar>, BrokerError>;

    /// Fetch historical bars for `symbol` between `start` and `end`.
    async fn get_historical_bars(
        &self,
        symbol: &Symbol,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Bar>, BrokerError>;

    /// Fetch the latest quote (best bid/ask or last trade) for `symbol`.
    async fn get_latest_quote(&self, symbol: &Symbol) -> Result<Decimal, BrokerError>;
}
