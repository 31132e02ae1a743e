//! Order and trade persistence.
//!
//! [`OrderRepository::save_transition`] is the one atomic unit of work the
//! order manager and reconciler build every state change on: load, mutate,
//! append the resulting [`OrderEvent`], all under one write lock, so a
//! concurrent reader never observes a state without its audit entry.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::shared::{CorrelationId, OrderId, Symbol};
use crate::engine::error::EngineError;
use crate::engine::order_record::{OrderEvent, OrderRecord, OrderRole, TradeNote, TradeRecord};
use crate::engine::order_state::OrderState;

/// A mutation to run against a loaded [`OrderRecord`], producing the event
/// to append alongside it.
pub type OrderMutation = Box<dyn FnOnce(&mut OrderRecord) -> Result<OrderEvent, EngineError> + Send>;

/// Persistence contract for [`OrderRecord`]s and their audit trail.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert or overwrite an order, without touching its event log.
    async fn save(&self, order: &OrderRecord) -> Result<(), EngineError>;

    /// Look up by local id.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<OrderRecord>, EngineError>;

    /// Look up by broker-assigned id.
    async fn find_by_broker_id(&self, broker_id: &OrderId) -> Result<Option<OrderRecord>, EngineError>;

    /// All orders sharing a round-trip's correlation id.
    async fn find_by_correlation_id(
        &self,
        correlation_id: &CorrelationId,
    ) -> Result<Vec<OrderRecord>, EngineError>;

    /// Non-terminal `Entry` orders for one symbol, used by the reconciler
    /// and the risk gate's open-position count.
    async fn non_terminal_entries_for_symbol(
        &self,
        symbol: &Symbol,
    ) -> Result<Vec<OrderRecord>, EngineError>;

    /// Every non-terminal order, across all symbols.
    async fn find_active(&self) -> Result<Vec<OrderRecord>, EngineError>;

    /// Whether a `FILLED` `Entry` order already exists for `symbol`, used by
    /// the startup reconciler to decide whether a broker position needs a
    /// synthetic entry created for it.
    async fn has_filled_entry_for_symbol(&self, symbol: &Symbol) -> Result<bool, EngineError>;

    /// Append one immutable fact to an order's audit trail.
    ///
    /// Implementations MUST reject overwriting or removing a previously
    /// appended event.
    async fn append_event(&self, event: OrderEvent) -> Result<(), EngineError>;

    /// Full audit trail for one order, in append order.
    async fn events_for(&self, id: &OrderId) -> Result<Vec<OrderEvent>, EngineError>;

    /// Load `id`, apply `mutate` to it, persist the mutated record and the
    /// event it returns, as one unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OrderNotFound`] if `id` is unknown, or
    /// whatever error `mutate` returns (the record is left unchanged in
    /// that case).
    async fn save_transition(
        &self,
        id: &OrderId,
        mutate: OrderMutation,
    ) -> Result<OrderRecord, EngineError>;
}

/// In-memory [`OrderRepository`]. Reference implementation; not durable.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<OrderId, OrderRecord>>,
    events: RwLock<HashMap<OrderId, Vec<OrderEvent>>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            events: RwLock::new(HashMap::new()),
        }
    }

    /// Number of orders currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().expect("lock poisoned").len()
    }

    /// Whether the repository holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().expect("lock poisoned").is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &OrderRecord) -> Result<(), EngineError> {
        self.orders
            .write()
            .expect("lock poisoned")
            .insert(order.local_id.clone(), order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<OrderRecord>, EngineError> {
        Ok(self.orders.read().expect("lock poisoned").get(id).cloned())
    }

    async fn find_by_broker_id(&self, broker_id: &OrderId) -> Result<Option<OrderRecord>, EngineError> {
        let orders = self.orders.read().expect("lock poisoned");
        Ok(orders
            .values()
            .find(|o| o.broker_id.as_ref() == Some(broker_id))
            .cloned())
    }

    async fn find_by_correlation_id(
        &self,
        correlation_id: &CorrelationId,
    ) -> Result<Vec<OrderRecord>, EngineError> {
        let orders = self.orders.read().expect("lock poisoned");
        Ok(orders
            .values()
            .filter(|o| &o.correlation_id == correlation_id)
            .cloned()
            .collect())
    }

    async fn non_terminal_entries_for_symbol(
        &self,
        symbol: &Symbol,
    ) -> Result<Vec<OrderRecord>, EngineError> {
        let orders = self.orders.read().expect("lock poisoned");
        Ok(orders
            .values()
            .filter(|o| {
                &o.symbol == symbol && o.order_role == OrderRole::Entry && !o.state.is_terminal()
            })
            .cloned()
            .collect())
    }

    async fn find_active(&self) -> Result<Vec<OrderRecord>, EngineError> {
        let orders = self.orders.read().expect("lock poisoned");
        Ok(orders.values().filter(|o| !o.state.is_terminal()).cloned().collect())
    }

    async fn has_filled_entry_for_symbol(&self, symbol: &Symbol) -> Result<bool, EngineError> {
        let orders = self.orders.read().expect("lock poisoned");
        Ok(orders.values().any(|o| {
            &o.symbol == symbol && o.order_role == OrderRole::Entry && o.state == OrderState::Filled
        }))
    }

    async fn append_event(&self, event: OrderEvent) -> Result<(), EngineError> {
        self.events
            .write()
            .expect("lock poisoned")
            .entry(event.order_local_id.clone())
            .or_default()
            .push(event);
        Ok(())
    }

    async fn events_for(&self, id: &OrderId) -> Result<Vec<OrderEvent>, EngineError> {
        Ok(self
            .events
            .read()
            .expect("lock poisoned")
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_transition(&self, id: &OrderId, mutate: OrderMutation) -> Result<OrderRecord, EngineError> {
        let mut orders = self.orders.write().expect("lock poisoned");
        let order = orders.get_mut(id).ok_or_else(|| EngineError::OrderNotFound(id.to_string()))?;
        let event = mutate(order)?;
        let updated = order.clone();
        drop(orders);
        self.events
            .write()
            .expect("lock poisoned")
            .entry(id.clone())
            .or_default()
            .push(event);
        Ok(updated)
    }
}

/// Persistence contract for closed [`TradeRecord`]s and their notes.
///
/// Both collections are append-only: a trade, once recorded, is never
/// edited or deleted by the engine core.
#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Append one closed trade. Idempotent on `correlation_id`: a second
    /// call for the same correlation id is a no-op.
    async fn record_trade(&self, trade: TradeRecord) -> Result<(), EngineError>;

    /// All trades closed today (by `entry_at`/`exit_at` date), for
    /// circuit-breaker reconstruction after a restart.
    async fn trades_closed_on(&self, date: chrono::NaiveDate) -> Result<Vec<TradeRecord>, EngineError>;

    /// Whether a trade already exists for this correlation id.
    async fn has_trade_for_correlation(
        &self,
        correlation_id: &CorrelationId,
    ) -> Result<bool, EngineError>;

    /// Attach a free-text note to a previously recorded trade.
    async fn add_note(&self, note: TradeNote) -> Result<(), EngineError>;
}

/// In-memory [`TradeRepository`]. Reference implementation; not durable.
#[derive(Default)]
pub struct InMemoryTradeRepository {
    trades: RwLock<Vec<TradeRecord>>,
    notes: RwLock<Vec<TradeNote>>,
}

impl InMemoryTradeRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trades: RwLock::new(Vec::new()),
            notes: RwLock::new(Vec::new()),
        }
    }

    /// Number of trades currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.read().expect("lock poisoned").len()
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn record_trade(&self, trade: TradeRecord) -> Result<(), EngineError> {
        let mut trades = self.trades.write().expect("lock poisoned");
        if trades.iter().any(|t| t.correlation_id == trade.correlation_id) {
            return Ok(());
        }
        trades.push(trade);
        Ok(())
    }

    async fn trades_closed_on(&self, date: chrono::NaiveDate) -> Result<Vec<TradeRecord>, EngineError> {
        let trades = self.trades.read().expect("lock poisoned");
        Ok(trades
            .iter()
            .filter(|t| t.exit_at.as_datetime().date_naive() == date)
            .cloned()
            .collect())
    }

    async fn has_trade_for_correlation(
        &self,
        correlation_id: &CorrelationId,
    ) -> Result<bool, EngineError> {
        Ok(self
            .trades
            .read()
            .expect("lock poisoned")
            .iter()
            .any(|t| &t.correlation_id == correlation_id))
    }

    async fn add_note(&self, note: TradeNote) -> Result<(), EngineError> {
        self.notes.write().expect("lock poisoned").push(note);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_execution::value_objects::{OrderSide, OrderType};
    use crate::domain::shared::{Money, Quantity, Timestamp};
    use crate::engine::order_record::OrderEventKind;
    use crate::engine::order_state::OrderState;

    fn sample_order() -> OrderRecord {
        OrderRecord::new(
            Symbol::new("AAPL"),
            OrderSide::Buy,
            OrderType::Stop,
            OrderRole::Entry,
            Quantity::from_i64(10),
            CorrelationId::generate(),
            None,
            Some("velez".to_string()),
        )
    }

    #[tokio::test]
    async fn save_and_find_by_id() {
        let repo = InMemoryOrderRepository::new();
        let order = sample_order();
        let id = order.local_id.clone();
        repo.save(&order).await.unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn find_by_id_not_found() {
        let repo = InMemoryOrderRepository::new();
        assert!(repo.find_by_id(&OrderId::new("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn has_filled_entry_for_symbol_ignores_other_roles_and_states() {
        let repo = InMemoryOrderRepository::new();
        assert!(!repo.has_filled_entry_for_symbol(&Symbol::new("AAPL")).await.unwrap());

        let mut pending = sample_order();
        pending.force_state(OrderState::Accepted);
        repo.save(&pending).await.unwrap();
        assert!(!repo.has_filled_entry_for_symbol(&Symbol::new("AAPL")).await.unwrap());

        let mut filled = sample_order();
        filled.force_state(OrderState::Filled);
        repo.save(&filled).await.unwrap();
        assert!(repo.has_filled_entry_for_symbol(&Symbol::new("AAPL")).await.unwrap());
    }

    #[tokio::test]
    async fn non_terminal_entries_excludes_filled_and_other_symbols() {
        let repo = InMemoryOrderRepository::new();
        let mut open = sample_order();
        open.force_state(OrderState::Accepted);
        repo.save(&open).await.unwrap();

        let mut filled = sample_order();
        filled.force_state(OrderState::Filled);
        repo.save(&filled).await.unwrap();

        let mut other_symbol = OrderRecord::new(
            Symbol::new("MSFT"),
            OrderSide::Buy,
            OrderType::Stop,
            OrderRole::Entry,
            Quantity::from_i64(10),
            CorrelationId::generate(),
            None,
            None,
        );
        other_symbol.force_state(OrderState::Accepted);
        repo.save(&other_symbol).await.unwrap();

        let found = repo.non_terminal_entries_for_symbol(&Symbol::new("AAPL")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].local_id, open.local_id);
    }

    #[tokio::test]
    async fn save_transition_is_atomic_with_its_event() {
        let repo = InMemoryOrderRepository::new();
        let order = sample_order();
        let id = order.local_id.clone();
        repo.save(&order).await.unwrap();

        let updated = repo
            .save_transition(
                &id,
                Box::new(|order| {
                    let old = order.state;
                    order.transition(OrderState::Submitted)?;
                    Ok(OrderEvent::new(
                        order,
                        OrderEventKind::Submitted,
                        Some(old),
                        Some(order.state),
                        None,
                    ))
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.state, OrderState::Submitted);
        let events = repo.events_for(&id).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].new_state, Some(OrderState::Submitted));
    }

    #[tokio::test]
    async fn save_transition_unknown_id_errors() {
        let repo = InMemoryOrderRepository::new();
        let err = repo
            .save_transition(
                &OrderId::new("missing"),
                Box::new(|order| {
                    order.transition(OrderState::Submitted)?;
                    Ok(OrderEvent::new(order, OrderEventKind::Submitted, None, None, None))
                }),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::OrderNotFound(_)));
    }

    #[tokio::test]
    async fn trade_repository_is_idempotent_by_correlation_id() {
        let repo = InMemoryTradeRepository::new();
        let correlation_id = CorrelationId::generate();
        let trade = TradeRecord::close_long(
            correlation_id.clone(),
            Symbol::new("AAPL"),
            Quantity::from_i64(10),
            Money::usd(100.0),
            Money::usd(101.0),
            Timestamp::now(),
            Timestamp::now(),
            None,
            Money::ZERO,
        )
        .unwrap();
        repo.record_trade(trade.clone()).await.unwrap();
        repo.record_trade(trade).await.unwrap();
        assert_eq!(repo.len(), 1);
        assert!(repo.has_trade_for_correlation(&correlation_id).await.unwrap());
    }
}
