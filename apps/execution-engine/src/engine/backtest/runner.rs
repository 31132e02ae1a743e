//! Deterministic backtest orchestration.
//!
//! Drives the exact same [`OrderManager`] / [`RiskGate`] / [`CircuitBreaker`]
//! / strategy pipeline a live session uses, against a [`SimBroker`] instead
//! of a network adapter, over an in-memory bar stream instead of a
//! subscription. One [`BacktestRunner`] owns one run; nothing about it is
//! reused across runs.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn};

use crate::domain::order_execution::value_objects::{OrderSide, OrderType};
use crate::domain::shared::{CorrelationId, Money, OrderId, Quantity, Symbol, Timestamp};
use crate::engine::adapter::{BrokerAdapter, TradeUpdate, TradeUpdateKind};
use crate::engine::candle::{Bar, Candle, CandleAggregator};
use crate::engine::config::{BacktestConfig, RiskConfig, StrategyConfig};
use crate::engine::indicators::IndicatorCalculator;
use crate::engine::order_manager::OrderManager;
use crate::engine::order_record::{OrderRecord, OrderRole, TradeRecord};
use crate::engine::repository::{InMemoryOrderRepository, InMemoryTradeRepository, OrderRepository};
use crate::engine::risk::{CircuitBreaker, PositionSizer, RiskGate};
use crate::engine::strategy::{OpenPosition, Signal, Strategy, VelezStrategy};

use super::metrics::{compute_metrics, BacktestMetrics};
use super::sim_broker::SimBroker;

const MIN_FILL_PRICE: Decimal = dec!(0.01);

/// Output of one finished backtest run.
#[derive(Debug, Clone)]
pub struct BacktestResult {
    /// Unique identifier for this run.
    pub run_id: String,
    /// Computed performance summary.
    pub metrics: BacktestMetrics,
    /// Every closed round-trip, in close order.
    pub trades: Vec<TradeRecord>,
    /// (candle timestamp, mark-to-market equity) pairs.
    pub equity_curve: Vec<(Timestamp, Decimal)>,
}

#[derive(Clone)]
struct OpenRunnerPosition {
    entry: OrderRecord,
    stop: Option<OrderRecord>,
    qty: Quantity,
    entry_price: Money,
    stop_price: Money,
    opened_at: Timestamp,
}

#[derive(Clone)]
struct PendingEntry {
    order: OrderRecord,
    planned_stop: Money,
    candles_since_submit: u32,
}

/// Orchestrates one deterministic backtest run across one or more symbols.
pub struct BacktestRunner {
    symbols: Vec<Symbol>,
    strategy_config: StrategyConfig,
    backtest_config: BacktestConfig,
    aggregators: HashMap<Symbol, CandleAggregator>,
    indicators: HashMap<Symbol, IndicatorCalculator>,
    strategies: HashMap<Symbol, VelezStrategy>,
    positions: HashMap<Symbol, OpenRunnerPosition>,
    pending_entries: HashMap<Symbol, PendingEntry>,
    broker: Arc<SimBroker>,
    order_manager: OrderManager,
    repository: Arc<InMemoryOrderRepository>,
    breaker: Arc<CircuitBreaker>,
    risk_gate: RiskGate,
}

impl BacktestRunner {
    /// Build a runner trading `symbols` with the given configuration
    /// sections.
    ///
    /// # Errors
    ///
    /// Returns an error if `strategy_config` or `risk_config` fails
    /// validation.
    pub fn new(
        symbols: Vec<Symbol>,
        strategy_config: StrategyConfig,
        risk_config: RiskConfig,
        backtest_config: BacktestConfig,
    ) -> Result<Self> {
        strategy_config.validate().context("invalid strategy config")?;
        risk_config.validate().context("invalid risk config")?;

        let mut aggregators = HashMap::new();
        let mut indicators = HashMap::new();
        let mut strategies = HashMap::new();
        for symbol in &symbols {
            let aggregator = CandleAggregator::new(symbol.clone(), strategy_config.candle_interval_minutes)
                .expect("interval validated above");
            aggregators.insert(symbol.clone(), aggregator);
            indicators.insert(
                symbol.clone(),
                IndicatorCalculator::new(strategy_config.sma_fast, strategy_config.sma_slow),
            );
            strategies.insert(symbol.clone(), VelezStrategy::new(symbol.clone(), strategy_config.clone()));
        }

        let broker = Arc::new(SimBroker::new(
            backtest_config.initial_equity,
            backtest_config.slippage_per_share,
        ));
        let repository = Arc::new(InMemoryOrderRepository::new());
        let trades = Arc::new(InMemoryTradeRepository::new());
        let breaker = Arc::new(CircuitBreaker::new(&risk_config));
        let risk_gate = RiskGate::new(breaker.clone(), risk_config.clone());
        let order_manager = OrderManager::new(
            repository.clone(),
            trades,
            broker.clone() as Arc<dyn BrokerAdapter>,
        );

        Ok(Self {
            symbols,
            strategy_config,
            backtest_config,
            aggregators,
            indicators,
            strategies,
            positions: HashMap::new(),
            pending_entries: HashMap::new(),
            broker,
            order_manager,
            repository,
            breaker,
            risk_gate,
        })
    }

    /// Run the backtest over `bars`, which need not be pre-sorted but must
    /// all belong to one of the runner's symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if any underlying order-management call fails in a
    /// way that isn't recoverable (broker rejections are handled inline;
    /// repository/state-machine errors are not expected and propagate).
    pub async fn run(&mut self, mut bars: Vec<Bar>) -> Result<BacktestResult> {
        bars.sort_by(|a, b| a.timestamp.as_datetime().cmp(&b.timestamp.as_datetime()));

        let mut current_date: Option<chrono::NaiveDate> = None;
        let mut last_bar: HashMap<Symbol, Bar> = HashMap::new();
        let mut trades: Vec<TradeRecord> = Vec::new();
        let mut equity_curve: Vec<(Timestamp, Decimal)> = Vec::new();

        for bar in &bars {
            let bar_date = bar.timestamp.as_datetime().date_naive();
            if let Some(date) = current_date {
                if bar_date != date {
                    self.end_of_day(&last_bar, &mut trades).await?;
                }
            }
            current_date = Some(bar_date);

            let fills = self.broker.process_bar(bar);
            for fill in fills {
                self.handle_fill(fill, &mut trades).await?;
            }

            self.broker.update_market_price(bar);
            last_bar.insert(bar.symbol.clone(), bar.clone());

            if let Some(candle) = self.aggregators.get_mut(&bar.symbol).expect("known symbol").process_bar(bar) {
                self.on_candle(&bar.symbol, &candle).await?;
                equity_curve.push((candle.timestamp, self.broker.equity()));
            }
        }

        self.end_of_day(&last_bar, &mut trades).await?;

        let metrics = compute_metrics(&trades, &equity_curve, self.backtest_config.initial_equity);
        Ok(BacktestResult {
            run_id: uuid::Uuid::new_v4().to_string(),
            metrics,
            trades,
            equity_curve,
        })
    }

    async fn open_orders_snapshot(&self) -> Result<HashMap<OrderId, OrderRecord>> {
        let active = self.repository.find_active().await?;
        Ok(active.into_iter().map(|o| (o.local_id.clone(), o)).collect())
    }

    async fn on_candle(&mut self, symbol: &Symbol, candle: &Candle) -> Result<()> {
        let indicator_set = self.indicators.get_mut(symbol).expect("known symbol").on_candle(candle);

        if let Some(position) = self.positions.get(symbol).cloned() {
            self.evaluate_open_position(symbol, candle, position).await?;
        } else if let Some(pending) = self.pending_entries.get(symbol).cloned() {
            self.evaluate_pending_entry(symbol, pending).await?;
        } else {
            self.evaluate_flat(symbol, candle, indicator_set).await?;
        }
        Ok(())
    }

    async fn evaluate_open_position(
        &mut self,
        symbol: &Symbol,
        candle: &Candle,
        mut position: OpenRunnerPosition,
    ) -> Result<()> {
        let open_position = OpenPosition {
            qty: position.qty.amount(),
            entry_price: position.entry_price,
            stop_price: position.stop_price,
        };

        let strategy = self.strategies.get_mut(symbol).expect("known symbol");
        let new_stop = strategy.should_update_stop(candle, &open_position);
        let should_exit = strategy.should_exit(candle);

        if let Some(new_stop) = new_stop {
            if let Some(stop_order) = &position.stop {
                let updated = self.order_manager.update_stop_loss(stop_order, new_stop).await?;
                position.stop = Some(updated);
            }
            position.stop_price = new_stop;
            self.positions.insert(symbol.clone(), position.clone());
        }

        if should_exit {
            self.request_protected_exit(symbol, &position).await?;
        }

        Ok(())
    }

    async fn evaluate_pending_entry(&mut self, symbol: &Symbol, mut pending: PendingEntry) -> Result<()> {
        pending.candles_since_submit += 1;
        let expired = self
            .strategies
            .get(symbol)
            .expect("known symbol")
            .should_cancel_pending(pending.candles_since_submit);

        if expired {
            self.order_manager.cancel_pending_entry(&pending.order).await?;
            self.pending_entries.remove(symbol);
        } else {
            self.pending_entries.insert(symbol.clone(), pending);
        }
        Ok(())
    }

    async fn evaluate_flat(
        &mut self,
        symbol: &Symbol,
        candle: &Candle,
        indicators: crate::engine::indicators::IndicatorSet,
    ) -> Result<()> {
        let strategy = self.strategies.get(symbol).expect("known symbol");
        if indicators.bar_count < strategy.required_history() {
            return Ok(());
        }
        let (can_trade, _) = self.breaker.can_trade();
        if !can_trade {
            return Ok(());
        }
        if !strategy.should_long(candle, &indicators) {
            return Ok(());
        }
        let signal: Signal = strategy.build_signal(candle);

        let open_orders = self.open_orders_snapshot().await?;
        let approval = self
            .risk_gate
            .check(symbol, signal.entry_price, signal.stop_loss_price, &open_orders, self.broker.as_ref())
            .await?;

        if !approval.approved || approval.sizing.qty == 0 {
            if let Some(reason) = approval.reason {
                info!(%symbol, reason, "entry rejected by risk gate");
            }
            return Ok(());
        }

        let qty = Quantity::new(Decimal::from(approval.sizing.qty));
        let order = self
            .order_manager
            .submit_entry(
                symbol.clone(),
                OrderSide::Buy,
                OrderType::Stop,
                qty,
                None,
                Some(signal.entry_price),
                CorrelationId::generate(),
                Some(signal.strategy_name.to_string()),
            )
            .await?;

        self.pending_entries.insert(
            symbol.clone(),
            PendingEntry {
                order,
                planned_stop: signal.stop_loss_price,
                candles_since_submit: 0,
            },
        );
        Ok(())
    }

    async fn handle_fill(&mut self, fill: super::sim_broker::Fill, trades: &mut Vec<TradeRecord>) -> Result<()> {
        let update = TradeUpdate {
            broker_order_id: fill.order_id.clone(),
            kind: TradeUpdateKind::Fill,
            filled_qty: Some(fill.qty),
            filled_avg_price: Some(fill.price),
            new_broker_order_id: None,
            timestamp: fill.timestamp,
        };
        let Some(order) = self.order_manager.handle_trade_update(update).await? else {
            return Ok(());
        };

        match order.order_role {
            OrderRole::Entry => self.handle_entry_fill(order).await?,
            OrderRole::StopLoss | OrderRole::ExitMarket => self.handle_exit_fill(order, trades).await?,
        }
        Ok(())
    }

    async fn handle_entry_fill(&mut self, order: OrderRecord) -> Result<()> {
        let Some(pending) = self.pending_entries.remove(&order.symbol) else {
            warn!(symbol = %order.symbol, "entry filled with no tracked pending state");
            return Ok(());
        };

        self.broker.register_stop_loss(order.symbol.clone(), order.qty_filled, pending.planned_stop);
        let stop_order = self
            .order_manager
            .submit_stop_loss(&order, order.qty_filled, pending.planned_stop)
            .await?;

        self.positions.insert(
            order.symbol.clone(),
            OpenRunnerPosition {
                entry: order.clone(),
                stop: Some(stop_order),
                qty: order.qty_filled,
                entry_price: order.avg_fill_price.unwrap_or(Money::ZERO),
                stop_price: pending.planned_stop,
                opened_at: order.updated_at,
            },
        );
        Ok(())
    }

    async fn handle_exit_fill(&mut self, order: OrderRecord, trades: &mut Vec<TradeRecord>) -> Result<()> {
        let Some(position) = self.positions.remove(&order.symbol) else {
            warn!(symbol = %order.symbol, "exit filled with no tracked open position");
            return Ok(());
        };

        let trade = TradeRecord::close_long(
            position.entry.correlation_id.clone(),
            order.symbol.clone(),
            order.qty_filled,
            position.entry_price,
            order.avg_fill_price.unwrap_or(Money::ZERO),
            position.opened_at,
            order.updated_at,
            position.entry.strategy.clone(),
            Money::ZERO,
        )?;

        self.breaker.record_trade(trade.pnl);
        self.order_manager.record_closed_trade(trade.clone()).await?;
        if let Some(strategy) = self.strategies.get_mut(&order.symbol) {
            strategy.on_position_closed();
        }
        trades.push(trade);
        Ok(())
    }

    /// Cancel the stop leg (if any) against its already-transitioned
    /// terminal state so `request_exit`'s internal cancel-confirm wait
    /// returns on its first poll instead of idling out the five-second
    /// timeout with nothing left to ever confirm it in a backtest.
    async fn request_protected_exit(&mut self, symbol: &Symbol, position: &OpenRunnerPosition) -> Result<()> {
        if let Some(stop) = &position.stop {
            self.cancel_stop_immediately(stop).await?;
        }
        self.order_manager
            .request_exit(&position.entry, position.stop.as_ref(), position.qty)
            .await?;
        Ok(())
    }

    async fn cancel_stop_immediately(&self, stop: &OrderRecord) -> Result<()> {
        let Some(broker_id) = stop.broker_id.clone() else { return Ok(()) };
        let update = TradeUpdate {
            broker_order_id: broker_id.clone(),
            kind: TradeUpdateKind::Canceled,
            filled_qty: None,
            filled_avg_price: None,
            new_broker_order_id: None,
            timestamp: Timestamp::now(),
        };
        let _ = self.order_manager.handle_trade_update(update).await?;
        self.broker.cancel_order(&broker_id).await.ok();
        Ok(())
    }

    /// Session-end handling: flush partial candles, force-close every open
    /// position at the clamped/floored last price of the day, cancel every
    /// still-working order, and reset the circuit breaker against the
    /// day's closing equity.
    async fn end_of_day(&mut self, last_bar: &HashMap<Symbol, Bar>, trades: &mut Vec<TradeRecord>) -> Result<()> {
        for aggregator in self.aggregators.values_mut() {
            aggregator.flush();
        }

        let open_symbols: Vec<Symbol> = self.positions.keys().cloned().collect();
        for symbol in open_symbols {
            let Some(bar) = last_bar.get(&symbol) else { continue };
            let position = self.positions.get(&symbol).expect("just listed").clone();

            if let Some(stop) = &position.stop {
                self.cancel_stop_immediately(stop).await?;
            }
            let exit = self
                .order_manager
                .request_exit(&position.entry, position.stop.as_ref(), position.qty)
                .await?;
            let Some(broker_id) = exit.broker_id.clone() else { continue };

            let raw = (bar.close.amount() - self.backtest_config.slippage_per_share).max(bar.low.amount());
            let force_price = Money::new(raw.max(MIN_FILL_PRICE));

            if let Some(fill) = self.broker.force_fill(&broker_id, force_price, bar.timestamp) {
                self.handle_fill(fill, trades).await?;
            }
        }

        self.order_manager.cancel_all_pending().await?;
        self.pending_entries.clear();

        let equity = self.broker.equity();
        self.breaker.reset_daily(Money::new(equity));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(symbol: &str, minute: u32, open: f64, high: f64, low: f64, close: f64) -> Bar {
        use chrono::{TimeZone, Utc};
        Bar {
            symbol: Symbol::new(symbol),
            timestamp: Timestamp::new(
                Utc.with_ymd_and_hms(2024, 6, 3, 13, minute, 0).unwrap(),
            ),
            open: Money::usd(open),
            high: Money::usd(high),
            low: Money::usd(low),
            close: Money::usd(close),
            volume: 10_000,
        }
    }

    #[tokio::test]
    async fn empty_bar_stream_yields_flat_equity_curve() {
        let mut runner = BacktestRunner::new(
            vec![Symbol::new("AAPL")],
            StrategyConfig::default(),
            RiskConfig::default(),
            BacktestConfig::default(),
        )
        .unwrap();

        let result = runner.run(vec![]).await.unwrap();
        assert!(result.equity_curve.is_empty());
        assert!(result.trades.is_empty());
        assert_eq!(result.metrics.total_trades, 0);
    }

    #[tokio::test]
    async fn flat_bar_stream_produces_no_signal_and_no_trades() {
        let mut runner = BacktestRunner::new(
            vec![Symbol::new("AAPL")],
            StrategyConfig::default(),
            RiskConfig::default(),
            BacktestConfig::default(),
        )
        .unwrap();

        let bars: Vec<Bar> = (0..60)
            .map(|i| bar("AAPL", i, 100.0, 100.05, 99.95, 100.0))
            .collect();

        let result = runner.run(bars).await.unwrap();
        assert!(result.trades.is_empty());
    }
}
