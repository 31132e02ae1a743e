//! Async order manager: the single driver of order state for one trading
//! session.
//!
//! One instance owns every order placed this session; the startup
//! reconciler seeds it with broker truth before the first candle arrives,
//! and the backtest runner drives it against `SimBroker` exactly the way
//! live trading drives it against a real adapter.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::domain::order_execution::value_objects::{OrderSide, OrderType};
use crate::domain::shared::{CorrelationId, Money, OrderId, Quantity, Symbol};
use crate::engine::adapter::{BrokerAdapter, OrderRequest, TradeUpdate, TradeUpdateKind};
use crate::engine::error::EngineError;
use crate::engine::order_record::{OrderEvent, OrderEventKind, OrderRecord, OrderRole, TradeRecord};
use crate::engine::order_state::OrderState;
use crate::engine::repository::{OrderRepository, TradeRepository};

/// Number of times `submit_stop_loss` retries a rejected/failed protective
/// stop before falling back to an immediate market sell.
const STOP_SUBMIT_RETRIES: u32 = 3;
/// Pause between stop-submission retries.
const STOP_RETRY_PAUSE: Duration = Duration::from_secs(1);
/// How long `request_exit` waits for a pending cancel to confirm before
/// proceeding to submit the market exit anyway.
const CANCEL_CONFIRM_TIMEOUT: Duration = Duration::from_secs(5);
/// Poll interval while waiting for a cancel to confirm.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Drives every order through its lifecycle against a [`BrokerAdapter`].
///
/// Holds no strategy state of its own: the caller (the live loop or the
/// backtest runner) decides *when* to submit, cancel, or exit; this type
/// only knows *how*, and keeps the repository's audit trail consistent
/// with whatever the broker reports back.
pub struct OrderManager {
    repository: Arc<dyn OrderRepository>,
    trades: Arc<dyn TradeRepository>,
    broker: Arc<dyn BrokerAdapter>,
}

impl OrderManager {
    /// Build a manager over `repository`/`trades`/`broker`.
    #[must_use]
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        trades: Arc<dyn TradeRepository>,
        broker: Arc<dyn BrokerAdapter>,
    ) -> Self {
        Self {
            repository,
            trades,
            broker,
        }
    }

    /// Submit a new entry order.
    ///
    /// Risk approval is the risk gate's concern, not this method's: by the
    /// time `submit_entry` is called, `qty` has already cleared
    /// [`RiskGate::check`](crate::engine::risk::RiskGate::check).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Broker`] if the adapter rejects the submit
    /// call; the order is persisted in `SUBMIT_FAILED` either way.
    pub async fn submit_entry(
        &self,
        symbol: Symbol,
        side: OrderSide,
        order_type: OrderType,
        qty: Quantity,
        limit_price: Option<Money>,
        stop_price: Option<Money>,
        correlation_id: CorrelationId,
        strategy: Option<String>,
    ) -> Result<OrderRecord, EngineError> {
        let order = OrderRecord::new(
            symbol,
            side,
            order_type,
            OrderRole::Entry,
            qty,
            correlation_id,
            None,
            strategy,
        );
        self.repository.save(&order).await?;
        self.submit_and_track(order, limit_price, stop_price).await
    }

    /// Submit the protective stop for a filled entry, retrying on failure
    /// and falling back to an immediate market sell if every retry fails.
    ///
    /// Shared in spirit with the startup reconciler's emergency-stop
    /// placement: both need "place a stop, retry a few times, and never
    /// leave the position unprotected."
    ///
    /// # Errors
    ///
    /// Returns the last [`EngineError`] observed if both the retried stop
    /// and the market-sell fallback fail.
    pub async fn submit_stop_loss(
        &self,
        parent: &OrderRecord,
        qty: Quantity,
        stop_price: Money,
    ) -> Result<OrderRecord, EngineError> {
        let mut last_err = None;
        for attempt in 0..STOP_SUBMIT_RETRIES {
            let order = OrderRecord::new(
                parent.symbol.clone(),
                OrderSide::Sell,
                OrderType::Stop,
                OrderRole::StopLoss,
                qty,
                parent.correlation_id.clone(),
                Some(parent.local_id.clone()),
                parent.strategy.clone(),
            );
            self.repository.save(&order).await?;
            match self.submit_and_track(order, None, Some(stop_price)).await {
                Ok(submitted) => return Ok(submitted),
                Err(err) => {
                    warn!(
                        symbol = %parent.symbol,
                        attempt,
                        error = %err,
                        "stop-loss submission failed, retrying"
                    );
                    last_err = Some(err);
                    tokio::time::sleep(STOP_RETRY_PAUSE).await;
                }
            }
        }

        warn!(
            symbol = %parent.symbol,
            "stop-loss submission exhausted retries, falling back to market exit"
        );
        let fallback = OrderRecord::new(
            parent.symbol.clone(),
            OrderSide::Sell,
            OrderType::Market,
            OrderRole::ExitMarket,
            qty,
            parent.correlation_id.clone(),
            Some(parent.local_id.clone()),
            parent.strategy.clone(),
        );
        self.repository.save(&fallback).await?;
        self.submit_and_track(fallback, None, None)
            .await
            .map_err(|err| last_err.unwrap_or(err))
    }

    async fn submit_and_track(
        &self,
        mut order: OrderRecord,
        limit_price: Option<Money>,
        stop_price: Option<Money>,
    ) -> Result<OrderRecord, EngineError> {
        let request = OrderRequest {
            symbol: order.symbol.clone(),
            side: order.side,
            order_type: order.order_type,
            qty: order.qty_requested,
            limit_price,
            stop_price,
            time_in_force: "day".to_string(),
        };

        match self.broker.submit_order(&request).await {
            Ok(broker_id) => {
                order.broker_id = Some(broker_id);
                order.transition(OrderState::Submitted)?;
                self.repository.save(&order).await?;
                self.repository
                    .append_event(OrderEvent::new(
                        &order,
                        OrderEventKind::Submitted,
                        Some(OrderState::PendingSubmit),
                        Some(OrderState::Submitted),
                        None,
                    ))
                    .await?;
                info!(
                    symbol = %order.symbol,
                    role = ?order.order_role,
                    local_id = %order.local_id,
                    "order submitted"
                );
                Ok(order)
            }
            Err(broker_err) => {
                order.transition(OrderState::SubmitFailed)?;
                self.repository.save(&order).await?;
                self.repository
                    .append_event(OrderEvent::new(
                        &order,
                        OrderEventKind::Submitted,
                        Some(OrderState::PendingSubmit),
                        Some(OrderState::SubmitFailed),
                        Some(broker_err.to_string()),
                    ))
                    .await?;
                Err(EngineError::Broker(broker_err))
            }
        }
    }

    /// Dispatch one broker trade update onto the order it concerns.
    ///
    /// A stop-loss order reaching `FILL` is a pure no-op beyond recording
    /// its own state: recognizing that the round-trip closed and building
    /// the resulting [`TradeRecord`] is the caller's job, via
    /// [`Self::record_closed_trade`], since only the caller knows which
    /// entry this stop protected and at what price it was opened.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] if the update implies a
    /// transition the state machine forbids from the order's current
    /// state.
    pub async fn handle_trade_update(
        &self,
        update: TradeUpdate,
    ) -> Result<Option<OrderRecord>, EngineError> {
        let Some(order) = self.repository.find_by_broker_id(&update.broker_order_id).await? else {
            warn!(broker_order_id = %update.broker_order_id, "trade update for unknown order, ignoring");
            return Ok(None);
        };
        let local_id = order.local_id.clone();

        let updated = self
            .repository
            .save_transition(
                &local_id,
                Box::new(move |order| {
                    let old_state = order.state;
                    match update.kind {
                        TradeUpdateKind::New | TradeUpdateKind::Accepted => {
                            order.transition(OrderState::Accepted)?;
                        }
                        TradeUpdateKind::Fill => {
                            if let (Some(qty), Some(price)) =
                                (update.filled_qty, update.filled_avg_price)
                            {
                                order.apply_fill(qty, price);
                            }
                            order.transition(OrderState::Filled)?;
                        }
                        TradeUpdateKind::PartialFill => {
                            if let (Some(qty), Some(price)) =
                                (update.filled_qty, update.filled_avg_price)
                            {
                                order.apply_fill(qty, price);
                            }
                            order.transition(OrderState::PartiallyFilled)?;
                        }
                        TradeUpdateKind::Canceled => {
                            order.transition(OrderState::Canceled)?;
                        }
                        TradeUpdateKind::Rejected => {
                            order.transition(OrderState::Rejected)?;
                        }
                        TradeUpdateKind::Expired => {
                            order.transition(OrderState::Expired)?;
                        }
                        TradeUpdateKind::Replaced => {
                            if let Some(new_id) = update.new_broker_order_id.clone() {
                                order.replace_broker_id(new_id);
                            }
                        }
                    }
                    Ok(OrderEvent::new(
                        order,
                        OrderEventKind::Transitioned,
                        Some(old_state),
                        Some(order.state),
                        None,
                    ))
                }),
            )
            .await?;

        Ok(Some(updated))
    }

    /// Cancel a still-pending entry (expired buy-stop, strategy reversal).
    /// A no-op if the order already has no working broker leg.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Broker`] if the adapter's cancel call fails.
    pub async fn cancel_pending_entry(&self, order: &OrderRecord) -> Result<(), EngineError> {
        if !order.state.is_cancelable() {
            return Ok(());
        }
        let Some(broker_id) = order.broker_id.clone() else {
            return Ok(());
        };
        self.broker.cancel_order(&broker_id).await.map_err(EngineError::Broker)
    }

    /// Request the market exit of an open position.
    ///
    /// If `stop_order` is still working, its cancel is requested first and
    /// this waits up to [`CANCEL_CONFIRM_TIMEOUT`] for it to reach a
    /// terminal state, so the stop and the market exit can never both
    /// execute against the same shares. A timeout is logged and the exit
    /// proceeds anyway: leaving the position open is worse than a
    /// possible double-cancel race with a broker that rejects the stale
    /// stop.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Broker`] if the market-sell submission
    /// itself fails.
    pub async fn request_exit(
        &self,
        entry: &OrderRecord,
        stop_order: Option<&OrderRecord>,
        qty: Quantity,
    ) -> Result<OrderRecord, EngineError> {
        if let Some(stop) = stop_order {
            if stop.state.is_cancelable() {
                if let Some(broker_id) = stop.broker_id.clone() {
                    let _ = self.broker.cancel_order(&broker_id).await;
                }
                if timeout(CANCEL_CONFIRM_TIMEOUT, self.await_terminal(&stop.local_id))
                    .await
                    .is_err()
                {
                    warn!(
                        symbol = %entry.symbol,
                        "stop cancel did not confirm within timeout, exiting anyway"
                    );
                }
            }
        }

        let exit = OrderRecord::new(
            entry.symbol.clone(),
            OrderSide::Sell,
            OrderType::Market,
            OrderRole::ExitMarket,
            qty,
            entry.correlation_id.clone(),
            Some(entry.local_id.clone()),
            entry.strategy.clone(),
        );
        self.repository.save(&exit).await?;
        self.submit_and_track(exit, None, None).await
    }

    async fn await_terminal(&self, local_id: &OrderId) {
        loop {
            if let Ok(Some(order)) = self.repository.find_by_id(local_id).await {
                if order.state.is_terminal() {
                    return;
                }
            }
            tokio::time::sleep(CANCEL_POLL_INTERVAL).await;
        }
    }

    /// Replace a working stop's price (trailing stop update).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OrderNotFound`] if `stop_order` has no
    /// broker id yet, or [`EngineError::Broker`] if the replace call
    /// fails.
    pub async fn update_stop_loss(
        &self,
        stop_order: &OrderRecord,
        new_stop_price: Money,
    ) -> Result<OrderRecord, EngineError> {
        let Some(broker_id) = stop_order.broker_id.clone() else {
            return Err(EngineError::OrderNotFound(stop_order.local_id.to_string()));
        };
        let new_id = self
            .broker
            .replace_order(&broker_id, None, None, Some(new_stop_price))
            .await
            .map_err(EngineError::Broker)?;

        self.repository
            .save_transition(
                &stop_order.local_id,
                Box::new(move |order| {
                    let old_broker_id = order.replace_broker_id(new_id);
                    Ok(OrderEvent::new(
                        order,
                        OrderEventKind::Replaced,
                        None,
                        None,
                        old_broker_id.map(|id| format!("replaced broker id {id}")),
                    ))
                }),
            )
            .await
    }

    /// Cancel every non-terminal order currently tracked. Used on shutdown
    /// and by the reconciler when local state cannot be trusted.
    ///
    /// Returns the number of orders for which a cancel was actually
    /// requested; broker-side cancel failures are logged and skipped
    /// rather than aborting the sweep.
    pub async fn cancel_all_pending(&self) -> Result<usize, EngineError> {
        let active = self.repository.find_active().await?;
        let mut canceled = 0;
        for order in active {
            match self.cancel_pending_entry(&order).await {
                Ok(()) => canceled += 1,
                Err(err) => warn!(local_id = %order.local_id, error = %err, "failed to cancel order"),
            }
        }
        Ok(canceled)
    }

    /// Record a closed round-trip. Idempotent on `trade.correlation_id`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying [`TradeRepository`] returns.
    pub async fn record_closed_trade(&self, trade: TradeRecord) -> Result<(), EngineError> {
        self.trades.record_trade(trade).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::adapter::{AccountInfo, Position};
    use crate::engine::error::BrokerError;
    use crate::engine::repository::{InMemoryOrderRepository, InMemoryTradeRepository};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    struct FakeBroker {
        fail_next_n_stops: AtomicU32,
        next_id: AtomicU32,
        replaced_to: Mutex<Option<OrderId>>,
        canceled: Mutex<Vec<OrderId>>,
        reject_all: bool,
    }

    impl FakeBroker {
        fn new() -> Self {
            Self {
                fail_next_n_stops: AtomicU32::new(0),
                next_id: AtomicU32::new(1),
                replaced_to: Mutex::new(None),
                canceled: Mutex::new(Vec::new()),
                reject_all: false,
            }
        }

        fn failing_stops(n: u32) -> Self {
            Self {
                fail_next_n_stops: AtomicU32::new(n),
                ..Self::new()
            }
        }

        fn rejecting() -> Self {
            Self {
                reject_all: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl BrokerAdapter for FakeBroker {
        async fn connect(&self) -> Result<(), BrokerError> {
            Ok(())
        }
        async fn disconnect(&self) -> Result<(), BrokerError> {
            Ok(())
        }
        async fn submit_order(&self, request: &OrderRequest) -> Result<OrderId, BrokerError> {
            if self.reject_all {
                return Err(BrokerError::Api {
                    status: 422,
                    message: "rejected".to_string(),
                });
            }
            if request.order_type == OrderType::Stop
                && self.fail_next_n_stops.load(Ordering::SeqCst) > 0
            {
                self.fail_next_n_stops.fetch_sub(1, Ordering::SeqCst);
                return Err(BrokerError::Connection("timeout".to_string()));
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            Ok(OrderId::new(format!("broker-{id}")))
        }
        async fn cancel_order(&self, broker_order_id: &OrderId) -> Result<(), BrokerError> {
            self.canceled.lock().unwrap().push(broker_order_id.clone());
            Ok(())
        }
        async fn replace_order(
            &self,
            _broker_order_id: &OrderId,
            _qty: Option<Quantity>,
            _limit_price: Option<Money>,
            _stop_price: Option<Money>,
        ) -> Result<OrderId, BrokerError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let new_id = OrderId::new(format!("broker-{id}"));
            *self.replaced_to.lock().unwrap() = Some(new_id.clone());
            Ok(new_id)
        }
        async fn get_order_status(&self, _broker_order_id: &OrderId) -> Result<OrderState, BrokerError> {
            Ok(OrderState::Accepted)
        }
        async fn get_positions(&self) -> Result<Vec<Position>, BrokerError> {
            Ok(vec![])
        }
        async fn get_account(&self) -> Result<AccountInfo, BrokerError> {
            Ok(AccountInfo {
                equity: Money::usd(25000.0),
                buying_power: Money::usd(25000.0),
                cash: Money::usd(25000.0),
            })
        }
        async fn get_open_orders(&self) -> Result<Vec<(OrderId, OrderState)>, BrokerError> {
            Ok(vec![])
        }
        async fn get_recent_orders(&self, _since_hours: u32) -> Result<Vec<(OrderId, OrderState)>, BrokerError> {
            Ok(vec![])
        }
        async fn subscribe_trade_updates(
            &self,
        ) -> Result<tokio::sync::mpsc::UnboundedReceiver<TradeUpdate>, BrokerError> {
            let (_tx, rx) = tokio::sync::mpsc::unbounded_channel();
            Ok(rx)
        }
        fn broker_name(&self) -> &'static str {
            "fake"
        }
    }

    fn manager(broker: FakeBroker) -> (OrderManager, Arc<InMemoryOrderRepository>) {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let trades = Arc::new(InMemoryTradeRepository::new());
        let mgr = OrderManager::new(repo.clone(), trades, Arc::new(broker));
        (mgr, repo)
    }

    #[tokio::test]
    async fn submit_entry_success_transitions_to_submitted() {
        let (mgr, _repo) = manager(FakeBroker::new());
        let order = mgr
            .submit_entry(
                Symbol::new("AAPL"),
                OrderSide::Buy,
                OrderType::Stop,
                Quantity::from_i64(41),
                None,
                Some(Money::usd(155.20)),
                CorrelationId::generate(),
                Some("velez".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(order.state, OrderState::Submitted);
        assert!(order.broker_id.is_some());
    }

    #[tokio::test]
    async fn submit_entry_broker_rejection_sets_submit_failed() {
        let (mgr, _repo) = manager(FakeBroker::rejecting());
        let err = mgr
            .submit_entry(
                Symbol::new("AAPL"),
                OrderSide::Buy,
                OrderType::Stop,
                Quantity::from_i64(41),
                None,
                Some(Money::usd(155.20)),
                CorrelationId::generate(),
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Broker(_)));
    }

    #[tokio::test]
    async fn handle_trade_update_fill_applies_qty_and_price() {
        let (mgr, _repo) = manager(FakeBroker::new());
        let order = mgr
            .submit_entry(
                Symbol::new("AAPL"),
                OrderSide::Buy,
                OrderType::Stop,
                Quantity::from_i64(41),
                None,
                Some(Money::usd(155.20)),
                CorrelationId::generate(),
                None,
            )
            .await
            .unwrap();

        let update = TradeUpdate {
            broker_order_id: order.broker_id.clone().unwrap(),
            kind: TradeUpdateKind::Fill,
            filled_qty: Some(Quantity::from_i64(41)),
            filled_avg_price: Some(Money::usd(155.20)),
            new_broker_order_id: None,
            timestamp: crate::domain::shared::Timestamp::now(),
        };
        let updated = mgr.handle_trade_update(update).await.unwrap().unwrap();
        assert_eq!(updated.state, OrderState::Filled);
        assert_eq!(updated.qty_filled, Quantity::from_i64(41));
    }

    #[tokio::test]
    async fn handle_trade_update_unknown_broker_id_is_ignored() {
        let (mgr, _repo) = manager(FakeBroker::new());
        let update = TradeUpdate {
            broker_order_id: OrderId::new("nonexistent"),
            kind: TradeUpdateKind::Fill,
            filled_qty: None,
            filled_avg_price: None,
            new_broker_order_id: None,
            timestamp: crate::domain::shared::Timestamp::now(),
        };
        assert!(mgr.handle_trade_update(update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cancel_pending_entry_calls_broker_when_cancelable() {
        let (mgr, _repo) = manager(FakeBroker::new());
        let mut order = mgr
            .submit_entry(
                Symbol::new("AAPL"),
                OrderSide::Buy,
                OrderType::Stop,
                Quantity::from_i64(10),
                None,
                Some(Money::usd(100.0)),
                CorrelationId::generate(),
                None,
            )
            .await
            .unwrap();
        order.transition(OrderState::Accepted).unwrap();
        mgr.cancel_pending_entry(&order).await.unwrap();
    }

    #[tokio::test]
    async fn update_stop_loss_swaps_broker_id() {
        let (mgr, repo) = manager(FakeBroker::new());
        let mut stop = OrderRecord::new(
            Symbol::new("AAPL"),
            OrderSide::Sell,
            OrderType::Stop,
            OrderRole::StopLoss,
            Quantity::from_i64(41),
            CorrelationId::generate(),
            None,
            None,
        );
        stop.broker_id = Some(OrderId::new("broker-1"));
        repo.save(&stop).await.unwrap();

        let updated = mgr.update_stop_loss(&stop, Money::usd(154.0)).await.unwrap();
        assert_ne!(updated.broker_id, Some(OrderId::new("broker-1")));
    }

    #[tokio::test]
    async fn cancel_all_pending_cancels_every_active_order() {
        let (mgr, repo) = manager(FakeBroker::new());
        for _ in 0..3 {
            let mut order = OrderRecord::new(
                Symbol::new("AAPL"),
                OrderSide::Buy,
                OrderType::Stop,
                OrderRole::Entry,
                Quantity::from_i64(10),
                CorrelationId::generate(),
                None,
                None,
            );
            order.broker_id = Some(OrderId::new("b"));
            order.force_state(OrderState::Accepted);
            repo.save(&order).await.unwrap();
        }
        let canceled = mgr.cancel_all_pending().await.unwrap();
        assert_eq!(canceled, 3);
    }

    #[tokio::test]
    async fn submit_stop_loss_falls_back_to_market_after_exhausting_retries() {
        let (mgr, _repo) = manager(FakeBroker::failing_stops(STOP_SUBMIT_RETRIES));
        let parent = OrderRecord::new(
            Symbol::new("AAPL"),
            OrderSide::Buy,
            OrderType::Stop,
            OrderRole::Entry,
            Quantity::from_i64(41),
            CorrelationId::generate(),
            None,
            None,
        );
        let result = mgr
            .submit_stop_loss(&parent, Quantity::from_i64(41), Money::usd(154.70))
            .await
            .unwrap();
        assert_eq!(result.order_role, OrderRole::ExitMarket);
        assert_eq!(result.order_type, OrderType::Market);
        assert_eq!(result.state, OrderState::Submitted);
    }

    #[tokio::test]
    async fn record_closed_trade_is_idempotent_by_correlation_id() {
        let (mgr, _repo) = manager(FakeBroker::new());
        let correlation_id = CorrelationId::generate();
        let trade = TradeRecord::close_long(
            correlation_id,
            Symbol::new("AAPL"),
            Quantity::from_i64(10),
            Money::usd(100.0),
            Money::usd(101.0),
            crate::domain::shared::Timestamp::now(),
            crate::domain::shared::Timestamp::now(),
            None,
            Money::ZERO,
        )
        .unwrap();
        mgr.record_closed_trade(trade.clone()).await.unwrap();
        mgr.record_closed_trade(trade).await.unwrap();
    }
}
