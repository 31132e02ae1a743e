//! Deterministic in-memory broker for backtesting.
//!
//! Implements [`BrokerAdapter`] against a time-ordered bar stream instead of
//! a network connection: no clocks, no I/O, same trait the live adapter
//! implements, so [`super::runner::BacktestRunner`] drives it with the exact
//! same `OrderManager` plumbing a live session uses.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::order_execution::value_objects::{OrderSide, OrderType};
use crate::domain::shared::{Money, OrderId, Quantity, Symbol, Timestamp};
use crate::engine::adapter::{AccountInfo, BrokerAdapter, OrderRequest, Position, TradeUpdate};
use crate::engine::candle::Bar;
use crate::engine::error::BrokerError;
use crate::engine::order_state::OrderState;

const PENNY: Decimal = dec!(0.01);

/// One fill produced by [`SimBroker::process_bar`] or
/// [`SimBroker::force_fill`].
#[derive(Debug, Clone)]
pub struct Fill {
    /// Broker-assigned id of the order that filled.
    pub order_id: OrderId,
    /// Instrument filled.
    pub symbol: Symbol,
    /// Side of the filled order.
    pub side: OrderSide,
    /// Type of the filled order.
    pub order_type: OrderType,
    /// Quantity filled (always the full requested quantity; this broker
    /// never partially fills).
    pub qty: Quantity,
    /// Fill price, after slippage and clamping.
    pub price: Money,
    /// Bar timestamp the fill occurred on.
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone)]
struct SimPosition {
    qty: Quantity,
    avg_entry_price: Money,
    opened_at: Timestamp,
}

#[derive(Debug, Clone)]
struct PendingOrder {
    symbol: Symbol,
    side: OrderSide,
    order_type: OrderType,
    qty: Quantity,
    stop_price: Option<Money>,
    limit_price: Option<Money>,
}

struct SimBrokerState {
    cash: Decimal,
    positions: HashMap<Symbol, SimPosition>,
    market_prices: HashMap<Symbol, Money>,
    pending: HashMap<OrderId, PendingOrder>,
    planned_stop: HashMap<Symbol, Money>,
    filled_log: Vec<Fill>,
    next_id: u64,
}

/// In-memory [`BrokerAdapter`] that fills orders against a bar stream using
/// the fixed per-bar priority: stop-loss sells, then buy-stop entries, then
/// market orders.
pub struct SimBroker {
    state: RwLock<SimBrokerState>,
    slippage_per_share: Decimal,
}

fn floor_penny(price: Decimal) -> Decimal {
    price.max(PENNY)
}

impl SimBroker {
    /// Build a broker seeded with `initial_cash`, applying
    /// `slippage_per_share` to every fill.
    #[must_use]
    pub fn new(initial_cash: Decimal, slippage_per_share: Decimal) -> Self {
        Self {
            state: RwLock::new(SimBrokerState {
                cash: initial_cash,
                positions: HashMap::new(),
                market_prices: HashMap::new(),
                pending: HashMap::new(),
                planned_stop: HashMap::new(),
                filled_log: Vec::new(),
                next_id: 1,
            }),
            slippage_per_share,
        }
    }

    /// Record the stop price the runner intends to submit for `symbol`'s
    /// entry, so it can be read back without an extra await. Purely a note;
    /// the real protective-stop order is still placed through
    /// [`BrokerAdapter::submit_order`] via the order manager.
    pub fn register_stop_loss(&self, symbol: Symbol, _qty: Quantity, stop_price: Money) {
        self.state.write().expect("lock poisoned").planned_stop.insert(symbol, stop_price);
    }

    /// Previously recorded planned stop for `symbol`, if any.
    #[must_use]
    pub fn planned_stop(&self, symbol: &Symbol) -> Option<Money> {
        self.state.read().expect("lock poisoned").planned_stop.get(symbol).copied()
    }

    /// Mark `symbol`'s position to `bar.close`. A no-op if no position is
    /// held.
    pub fn update_market_price(&self, bar: &Bar) {
        self.state
            .write()
            .expect("lock poisoned")
            .market_prices
            .insert(bar.symbol.clone(), bar.close);
    }

    /// Current equity: cash plus the marked value of every open position.
    #[must_use]
    pub fn equity(&self) -> Decimal {
        let state = self.state.read().expect("lock poisoned");
        let positions_value: Decimal = state
            .positions
            .iter()
            .map(|(symbol, pos)| {
                let price = state.market_prices.get(symbol).copied().unwrap_or(pos.avg_entry_price);
                price.amount() * pos.qty.amount()
            })
            .sum();
        state.cash + positions_value
    }

    fn next_order_id(state: &mut SimBrokerState) -> OrderId {
        let id = state.next_id;
        state.next_id += 1;
        OrderId::new(format!("sim-{id}"))
    }

    fn apply_fill(state: &mut SimBrokerState, order: &PendingOrder, price: Money) {
        let notional = price.amount() * order.qty.amount();
        match order.side {
            OrderSide::Buy => {
                state.cash -= notional;
                state
                    .positions
                    .entry(order.symbol.clone())
                    .and_modify(|pos| {
                        let new_qty = pos.qty + order.qty;
                        let new_avg = (pos.avg_entry_price.amount() * pos.qty.amount()
                            + price.amount() * order.qty.amount())
                            / new_qty.amount();
                        pos.avg_entry_price = Money::new(new_avg);
                        pos.qty = new_qty;
                    })
                    .or_insert(SimPosition {
                        qty: order.qty,
                        avg_entry_price: price,
                        opened_at: Timestamp::now(),
                    });
            }
            OrderSide::Sell => {
                state.cash += notional;
                if let Some(pos) = state.positions.get_mut(&order.symbol) {
                    pos.qty = pos.qty - order.qty;
                    if pos.qty.is_zero() || pos.qty.is_negative() {
                        state.positions.remove(&order.symbol);
                    }
                }
            }
        }
    }

    /// Force-fill a still-pending order at `price` without consulting the
    /// bar's own fill conditions. Used by the runner for end-of-day
    /// force-closes, where the fill is driven by the session boundary, not
    /// by price action on a new bar.
    pub fn force_fill(&self, order_id: &OrderId, price: Money, timestamp: Timestamp) -> Option<Fill> {
        let mut state = self.state.write().expect("lock poisoned");
        let order = state.pending.remove(order_id)?;
        Self::apply_fill(&mut state, &order, price);
        let fill = Fill {
            order_id: order_id.clone(),
            symbol: order.symbol.clone(),
            side: order.side,
            order_type: order.order_type,
            qty: order.qty,
            price,
            timestamp,
        };
        state.filled_log.push(fill.clone());
        Some(fill)
    }

    /// Process one bar for its symbol, filling any eligible pending orders
    /// in fixed priority (stop-loss sells, buy-stop entries, market
    /// orders), and return every fill produced.
    pub fn process_bar(&self, bar: &Bar) -> Vec<Fill> {
        let mut state = self.state.write().expect("lock poisoned");
        let mut fills = Vec::new();
        let mut entry_filled_this_bar = false;

        let mut ids: Vec<OrderId> = state
            .pending
            .iter()
            .filter(|(_, o)| o.symbol == bar.symbol)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        // Pass 1: stop-loss sells.
        for id in &ids {
            let Some(order) = state.pending.get(id).cloned() else { continue };
            if order.side != OrderSide::Sell || order.order_type != OrderType::Stop {
                continue;
            }
            if entry_filled_this_bar {
                continue;
            }
            let Some(stop_price) = order.stop_price else { continue };
            if bar.low > stop_price {
                continue;
            }
            let mut raw = bar.open.amount().min(stop_price.amount()) - self.slippage_per_share;
            raw = raw.max(bar.low.amount());
            let price = Money::new(floor_penny(raw));
            Self::apply_fill(&mut state, &order, price);
            state.pending.remove(id);
            let fill = Fill {
                order_id: id.clone(),
                symbol: order.symbol.clone(),
                side: order.side,
                order_type: order.order_type,
                qty: order.qty,
                price,
                timestamp: bar.timestamp,
            };
            state.filled_log.push(fill.clone());
            fills.push(fill);
        }

        // Pass 2: buy-stop entries.
        for id in &ids {
            let Some(order) = state.pending.get(id).cloned() else { continue };
            if order.side != OrderSide::Buy || order.order_type != OrderType::Stop {
                continue;
            }
            let Some(stop_price) = order.stop_price else { continue };
            if bar.high < stop_price {
                continue;
            }
            let mut raw = bar.open.amount().max(stop_price.amount()) + self.slippage_per_share;
            raw = raw.min(bar.high.amount());
            let price = Money::new(floor_penny(raw));
            Self::apply_fill(&mut state, &order, price);
            state.pending.remove(id);
            entry_filled_this_bar = true;
            let fill = Fill {
                order_id: id.clone(),
                symbol: order.symbol.clone(),
                side: order.side,
                order_type: order.order_type,
                qty: order.qty,
                price,
                timestamp: bar.timestamp,
            };
            state.filled_log.push(fill.clone());
            fills.push(fill);
        }

        // Pass 3: market orders.
        for id in &ids {
            let Some(order) = state.pending.get(id).cloned() else { continue };
            if order.order_type != OrderType::Market {
                continue;
            }
            let signed_slippage = match order.side {
                OrderSide::Buy => self.slippage_per_share,
                OrderSide::Sell => -self.slippage_per_share,
            };
            let mut raw = bar.open.amount() + signed_slippage;
            raw = raw.clamp(bar.low.amount(), bar.high.amount());
            let price = Money::new(floor_penny(raw));
            Self::apply_fill(&mut state, &order, price);
            state.pending.remove(id);
            let fill = Fill {
                order_id: id.clone(),
                symbol: order.symbol.clone(),
                side: order.side,
                order_type: order.order_type,
                qty: order.qty,
                price,
                timestamp: bar.timestamp,
            };
            state.filled_log.push(fill.clone());
            fills.push(fill);
        }

        fills
    }
}

#[async_trait]
impl BrokerAdapter for SimBroker {
    async fn connect(&self) -> Result<(), BrokerError> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), BrokerError> {
        Ok(())
    }

    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderId, BrokerError> {
        let mut state = self.state.write().expect("lock poisoned");
        let id = Self::next_order_id(&mut state);
        state.pending.insert(
            id.clone(),
            PendingOrder {
                symbol: request.symbol.clone(),
                side: request.side,
                order_type: request.order_type,
                qty: request.qty,
                stop_price: request.stop_price,
                limit_price: request.limit_price,
            },
        );
        Ok(id)
    }

    async fn cancel_order(&self, broker_order_id: &OrderId) -> Result<(), BrokerError> {
        self.state.write().expect("lock poisoned").pending.remove(broker_order_id);
        Ok(())
    }

    async fn replace_order(
        &self,
        broker_order_id: &OrderId,
        qty: Option<Quantity>,
        limit_price: Option<Money>,
        stop_price: Option<Money>,
    ) -> Result<OrderId, BrokerError> {
        let mut state = self.state.write().expect("lock poisoned");
        let Some(order) = state.pending.get_mut(broker_order_id) else {
            return Err(BrokerError::Api {
                status: 404,
                message: format!("order {broker_order_id} not found"),
            });
        };
        if let Some(qty) = qty {
            order.qty = qty;
        }
        if limit_price.is_some() {
            order.limit_price = limit_price;
        }
        if stop_price.is_some() {
            order.stop_price = stop_price;
        }
        Ok(broker_order_id.clone())
    }

    async fn get_order_status(&self, broker_order_id: &OrderId) -> Result<OrderState, BrokerError> {
        let state = self.state.read().expect("lock poisoned");
        if state.pending.contains_key(broker_order_id) {
            return Ok(OrderState::Accepted);
        }
        if state.filled_log.iter().any(|f| &f.order_id == broker_order_id) {
            return Ok(OrderState::Filled);
        }
        Err(BrokerError::Api {
            status: 404,
            message: format!("order {broker_order_id} not found"),
        })
    }

    async fn get_positions(&self) -> Result<Vec<Position>, BrokerError> {
        let state = self.state.read().expect("lock poisoned");
        Ok(state
            .positions
            .iter()
            .map(|(symbol, pos)| {
                let market_price = state.market_prices.get(symbol).copied().unwrap_or(pos.avg_entry_price);
                let market_value = Money::new(market_price.amount() * pos.qty.amount());
                let cost_basis = Money::new(pos.avg_entry_price.amount() * pos.qty.amount());
                Position {
                    symbol: symbol.clone(),
                    qty: pos.qty,
                    avg_entry_price: pos.avg_entry_price,
                    market_value,
                    unrealized_pl: market_value - cost_basis,
                }
            })
            .collect())
    }

    async fn get_account(&self) -> Result<AccountInfo, BrokerError> {
        let equity = Money::new(self.equity());
        Ok(AccountInfo {
            equity,
            buying_power: equity,
            cash: Money::new(self.state.read().expect("lock poisoned").cash),
        })
    }

    async fn get_open_orders(&self) -> Result<Vec<(OrderId, OrderState)>, BrokerError> {
        let state = self.state.read().expect("lock poisoned");
        Ok(state.pending.keys().map(|id| (id.clone(), OrderState::Accepted)).collect())
    }

    async fn get_recent_orders(&self, _since_hours: u32) -> Result<Vec<(OrderId, OrderState)>, BrokerError> {
        let state = self.state.read().expect("lock poisoned");
        Ok(state.filled_log.iter().map(|f| (f.order_id.clone(), OrderState::Filled)).collect())
    }

    async fn subscribe_trade_updates(
        &self,
    ) -> Result<tokio::sync::mpsc::UnboundedReceiver<TradeUpdate>, BrokerError> {
        // The runner drives fills directly from `process_bar`'s return
        // value; this broker never pushes onto the update stream.
        let (_tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Ok(rx)
    }

    fn broker_name(&self) -> &'static str {
        "sim"
    }
}
