//! Order aggregate, its append-only audit log, and closed round-trips.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_execution::value_objects::{OrderSide, OrderType};
use crate::domain::shared::{CorrelationId, Money, OrderId, Quantity, Symbol, Timestamp, TradeId};
use crate::engine::error::EngineError;
use crate::engine::order_state::{InvalidTransitionError, OrderState, OrderStateMachine};

/// Which leg of a round-trip an order plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderRole {
    /// Opens the position.
    Entry,
    /// Protective stop submitted once the entry fills.
    StopLoss,
    /// Discretionary market exit (strategy-driven or manual).
    ExitMarket,
}

/// A single order tracked through its full lifecycle.
///
/// `state` must never be mutated directly; go through
/// [`OrderRecord::transition`] so that the audit trail and the state machine
/// agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Stable local identifier, assigned at creation.
    pub local_id: OrderId,
    /// Broker-assigned identifier, known only after the adapter accepts it.
    pub broker_id: Option<OrderId>,
    /// Groups the entry, stop, and exit of one round-trip.
    pub correlation_id: CorrelationId,
    /// Instrument traded.
    pub symbol: Symbol,
    /// Buy or sell.
    pub side: OrderSide,
    /// Market / limit / stop / stop-limit / trailing-stop.
    pub order_type: OrderType,
    /// Role this order plays in the round-trip.
    pub order_role: OrderRole,
    /// Quantity requested.
    pub qty_requested: Quantity,
    /// Quantity filled so far.
    pub qty_filled: Quantity,
    /// Average fill price, set on (partial) fill.
    pub avg_fill_price: Option<Money>,
    /// Current lifecycle state.
    pub state: OrderState,
    /// Local id of the entry this order protects or closes, if any.
    pub parent_id: Option<OrderId>,
    /// Strategy that produced the signal, if any.
    pub strategy: Option<String>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Time of the most recent transition.
    pub updated_at: Timestamp,
}

impl OrderRecord {
    /// Build a new order in `PENDING_SUBMIT`.
    #[must_use]
    pub fn new(
        symbol: Symbol,
        side: OrderSide,
        order_type: OrderType,
        order_role: OrderRole,
        qty_requested: Quantity,
        correlation_id: CorrelationId,
        parent_id: Option<OrderId>,
        strategy: Option<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            local_id: OrderId::generate(),
            broker_id: None,
            correlation_id,
            symbol,
            side,
            order_type,
            order_role,
            qty_requested,
            qty_filled: Quantity::ZERO,
            avg_fill_price: None,
            state: OrderState::PendingSubmit,
            parent_id,
            strategy,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate and apply a state transition, touching `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransitionError`] if the table forbids `to` from the
    /// current state; the record is left unchanged.
    pub fn transition(&mut self, to: OrderState) -> Result<(), InvalidTransitionError> {
        OrderStateMachine::validate_transition(self.state, to)?;
        self.state = to;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Escape hatch for the startup reconciler: force a state without
    /// consulting the transition table, because the broker is authoritative
    /// at startup and local state may be stale or wrong.
    pub fn force_state(&mut self, to: OrderState) {
        self.state = to;
        self.updated_at = Timestamp::now();
    }

    /// Record a (partial) fill.
    pub fn apply_fill(&mut self, qty_filled: Quantity, avg_fill_price: Money) {
        self.qty_filled = qty_filled;
        self.avg_fill_price = Some(avg_fill_price);
    }

    /// Swap in a new broker id after a `replace_order` call.
    pub fn replace_broker_id(&mut self, new_id: OrderId) -> Option<OrderId> {
        self.broker_id.replace(new_id)
    }
}

/// Kind of fact recorded against an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEventKind {
    /// Submitted to the adapter.
    Submitted,
    /// State transition driven by a broker trade update.
    Transitioned,
    /// Forced to a state by the startup reconciler.
    Reconciled,
    /// Broker id swapped via `replace_order`.
    Replaced,
    /// Synthetic entry created for a broker position with no local record.
    OrphanCreated,
    /// Protective stop placed by the reconciler for an unprotected position.
    EmergencyStopPlaced,
}

/// One immutable fact appended to an order's audit trail.
///
/// Storage MUST reject any update or delete of a persisted `OrderEvent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Order this event belongs to.
    pub order_local_id: OrderId,
    /// What happened.
    pub event_type: OrderEventKind,
    /// State before the event, if applicable.
    pub old_state: Option<OrderState>,
    /// State after the event, if applicable.
    pub new_state: Option<OrderState>,
    /// Cumulative filled quantity at the time of the event.
    pub qty_filled: Option<Quantity>,
    /// Fill price at the time of the event.
    pub fill_price: Option<Money>,
    /// Broker id at the time of the event.
    pub broker_id: Option<OrderId>,
    /// Free-text detail (e.g. the reconciliation reason).
    pub detail: Option<String>,
    /// When the event was recorded.
    pub recorded_at: Timestamp,
}

impl OrderEvent {
    /// Build an event for `order`, capturing its current broker id.
    #[must_use]
    pub fn new(
        order: &OrderRecord,
        event_type: OrderEventKind,
        old_state: Option<OrderState>,
        new_state: Option<OrderState>,
        detail: Option<String>,
    ) -> Self {
        Self {
            order_local_id: order.local_id.clone(),
            event_type,
            old_state,
            new_state,
            qty_filled: Some(order.qty_filled),
            fill_price: order.avg_fill_price,
            broker_id: order.broker_id.clone(),
            detail,
            recorded_at: Timestamp::now(),
        }
    }
}

/// A closed round-trip: one filled entry paired with its filled exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Unique identifier for this trade.
    pub trade_id: TradeId,
    /// Correlation id shared with the entry/stop/exit orders.
    pub correlation_id: CorrelationId,
    /// Instrument traded.
    pub symbol: Symbol,
    /// `long` (the only side currently supported) or `short`.
    pub side: TradeSide,
    /// Quantity closed.
    pub qty: Quantity,
    /// Entry fill price.
    pub entry_price: Money,
    /// Exit fill price.
    pub exit_price: Money,
    /// Entry fill time.
    pub entry_at: Timestamp,
    /// Exit fill time.
    pub exit_at: Timestamp,
    /// Realized profit or loss.
    pub pnl: Money,
    /// Realized profit or loss as a percentage of the entry notional.
    pub pnl_pct: Decimal,
    /// Strategy that produced the entry signal.
    pub strategy: Option<String>,
    /// Holding duration in whole seconds.
    pub duration_seconds: i64,
    /// Commission charged, if any.
    pub commission: Money,
}

/// Direction of a closed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    /// Bought then sold.
    Long,
    /// Sold then bought (stubbed; short selling is out of scope).
    Short,
}

impl TradeRecord {
    /// Compute a closed long trade from its entry and exit legs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTrade`] if `qty` is not positive or the
    /// exit is not after the entry.
    pub fn close_long(
        correlation_id: CorrelationId,
        symbol: Symbol,
        qty: Quantity,
        entry_price: Money,
        exit_price: Money,
        entry_at: Timestamp,
        exit_at: Timestamp,
        strategy: Option<String>,
        commission: Money,
    ) -> Result<Self, EngineError> {
        if qty.is_zero() || qty.is_negative() {
            return Err(EngineError::InvalidTrade("qty must be positive".into()));
        }
        if exit_at.as_datetime() < entry_at.as_datetime() {
            return Err(EngineError::InvalidTrade("exit before entry".into()));
        }
        let pnl = Money::new((exit_price.amount() - entry_price.amount()) * qty.amount())
            - commission;
        let notional = entry_price.amount() * qty.amount();
        let pnl_pct = if notional.is_zero() {
            Decimal::ZERO
        } else {
            pnl.amount() / notional * Decimal::ONE_HUNDRED
        };
        let duration_seconds = exit_at.duration_since(entry_at).num_seconds();
        Ok(Self {
            trade_id: TradeId::generate(),
            correlation_id,
            symbol,
            side: TradeSide::Long,
            qty,
            entry_price,
            exit_price,
            entry_at,
            exit_at,
            pnl,
            pnl_pct,
            strategy,
            duration_seconds,
            commission,
        })
    }
}

/// Free-text annotation attachable to a [`TradeRecord`] after the fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeNote {
    /// Unique identifier for this note.
    pub note_id: OrderId,
    /// Trade this note annotates.
    pub trade_id: TradeId,
    /// Who wrote the note.
    pub author: String,
    /// Note body.
    pub body: String,
    /// When the note was created.
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_order() -> OrderRecord {
        OrderRecord::new(
            Symbol::new("AAPL"),
            OrderSide::Buy,
            OrderType::Stop,
            OrderRole::Entry,
            Quantity::from_i64(41),
            CorrelationId::generate(),
            None,
            Some("velez".to_string()),
        )
    }

    #[test]
    fn new_order_starts_pending_submit() {
        let order = sample_order();
        assert_eq!(order.state, OrderState::PendingSubmit);
        assert!(order.broker_id.is_none());
        assert!(order.qty_filled.is_zero());
    }

    #[test]
    fn transition_updates_state_and_timestamp() {
        let mut order = sample_order();
        let before = order.updated_at;
        order.transition(OrderState::Submitted).unwrap();
        assert_eq!(order.state, OrderState::Submitted);
        assert!(order.updated_at.as_datetime() >= before.as_datetime());
    }

    #[test]
    fn transition_rejects_invalid_jump_and_leaves_state_untouched() {
        let mut order = sample_order();
        let err = order.transition(OrderState::Filled).unwrap_err();
        assert_eq!(err.from, OrderState::PendingSubmit);
        assert_eq!(order.state, OrderState::PendingSubmit);
    }

    #[test]
    fn force_state_bypasses_the_table() {
        let mut order = sample_order();
        order.force_state(OrderState::Filled);
        assert_eq!(order.state, OrderState::Filled);
    }

    #[test]
    fn order_event_captures_broker_id_and_fill_state() {
        let mut order = sample_order();
        order.broker_id = Some(OrderId::new("b-1"));
        order.transition(OrderState::Submitted).unwrap();
        order.apply_fill(Quantity::from_i64(41), Money::usd(155.20));
        order.transition(OrderState::Accepted).unwrap();
        order.transition(OrderState::Filled).unwrap();
        let event = OrderEvent::new(
            &order,
            OrderEventKind::Transitioned,
            Some(OrderState::Accepted),
            Some(OrderState::Filled),
            None,
        );
        assert_eq!(event.broker_id, order.broker_id);
        assert_eq!(event.qty_filled, Some(Quantity::from_i64(41)));
    }

    #[test]
    fn close_long_computes_pnl_scenario_one() {
        let trade = TradeRecord::close_long(
            CorrelationId::generate(),
            Symbol::new("AAPL"),
            Quantity::from_i64(41),
            Money::new(dec!(155.20)),
            Money::new(dec!(154.70)),
            Timestamp::parse("2026-01-19T12:00:00Z").unwrap(),
            Timestamp::parse("2026-01-19T12:05:00Z").unwrap(),
            Some("velez".to_string()),
            Money::ZERO,
        )
        .unwrap();
        assert_eq!(trade.pnl, Money::new(dec!(-20.50)));
        assert_eq!(trade.duration_seconds, 300);
    }

    #[test]
    fn close_long_rejects_zero_qty() {
        let err = TradeRecord::close_long(
            CorrelationId::generate(),
            Symbol::new("AAPL"),
            Quantity::ZERO,
            Money::usd(100.0),
            Money::usd(101.0),
            Timestamp::now(),
            Timestamp::now(),
            None,
            Money::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTrade(_)));
    }

    #[test]
    fn close_long_rejects_exit_before_entry() {
        let err = TradeRecord::close_long(
            CorrelationId::generate(),
            Symbol::new("AAPL"),
            Quantity::from_i64(10),
            Money::usd(100.0),
            Money::usd(101.0),
            Timestamp::parse("2026-01-19T12:05:00Z").unwrap(),
            Timestamp::parse("2026-01-19T12:00:00Z").unwrap(),
            None,
            Money::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTrade(_)));
    }
}
