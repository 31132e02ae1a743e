//! Serialized pre-order approval: circuit breaker, position-count cap, and
//! position sizing, in that order.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::shared::{Money, Symbol};
use crate::engine::adapter::BrokerAdapter;
use crate::engine::config::RiskConfig;
use crate::engine::error::EngineError;
use crate::engine::order_record::{OrderRecord, OrderRole};
use crate::engine::order_state::OrderState;

use super::circuit_breaker::CircuitBreaker;
use super::sizer::{PositionSizer, SizingResult};

/// Outcome of a risk check for a candidate entry.
#[derive(Debug, Clone)]
pub struct RiskApproval {
    /// Whether the entry may be placed.
    pub approved: bool,
    /// Sizing result backing the approval (qty == 0 when rejected upstream
    /// of the sizer, e.g. by the circuit breaker or the position cap).
    pub sizing: SizingResult,
    /// Why the check failed, when `approved` is `false`.
    pub reason: Option<String>,
}

impl RiskApproval {
    fn rejected(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            sizing: SizingResult {
                qty: 0,
                risk_amount: Money::ZERO,
                stop_distance: Money::ZERO,
                position_value: Money::ZERO,
                reason: None,
            },
            reason: Some(reason.into()),
        }
    }
}

/// Guards every new entry behind the circuit breaker, the open-position
/// cap, and the position sizer, as one serialized unit of work.
///
/// The internal mutex exists so that two symbols signaling in the same
/// tick cannot both observe "2 of 3 positions open" and both proceed: the
/// fresh account fetch and the resulting sizing decision happen while
/// holding the lock, not just the counter check.
pub struct RiskGate {
    breaker: Arc<CircuitBreaker>,
    config: RiskConfig,
    lock: Mutex<()>,
}

impl RiskGate {
    /// Build a gate sharing ownership of `breaker`.
    #[must_use]
    pub fn new(breaker: Arc<CircuitBreaker>, config: RiskConfig) -> Self {
        Self {
            breaker,
            config,
            lock: Mutex::new(()),
        }
    }

    /// Check and size a candidate entry for `symbol` at `entry_price` /
    /// `stop_loss_price`, given the current open-order book.
    ///
    /// `open_orders` should contain every locally tracked order; this
    /// method filters it down to non-terminal `Entry` orders itself.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Broker`] if the fresh account fetch fails.
    pub async fn check(
        &self,
        symbol: &Symbol,
        entry_price: Money,
        stop_loss_price: Money,
        open_orders: &HashMap<crate::domain::shared::OrderId, OrderRecord>,
        broker: &dyn BrokerAdapter,
    ) -> Result<RiskApproval, EngineError> {
        let _guard = self.lock.lock().await;

        let (can_trade, reason) = self.breaker.can_trade();
        if !can_trade {
            return Ok(RiskApproval::rejected(
                reason.unwrap_or_else(|| "circuit breaker paused".to_string()),
            ));
        }

        let open_entry_count = open_orders
            .values()
            .filter(|o| o.order_role == OrderRole::Entry && !o.state.is_terminal())
            .count();
        if open_entry_count as u32 >= self.config.max_open_positions {
            return Ok(RiskApproval::rejected(format!(
                "max open positions reached: {open_entry_count}/{}",
                self.config.max_open_positions
            )));
        }

        let account = broker.get_account().await.map_err(EngineError::Broker)?;

        let sizing = PositionSizer::size(
            account.equity,
            account.buying_power,
            entry_price,
            stop_loss_price,
            &self.config,
        );

        if sizing.qty == 0 {
            return Ok(RiskApproval {
                approved: false,
                reason: sizing.reason.clone(),
                sizing,
            });
        }

        let _ = symbol;
        Ok(RiskApproval {
            approved: true,
            sizing,
            reason: None,
        })
    }

    /// Shared circuit breaker, for wiring into the reconciler's startup
    /// replay and the runner's daily reset.
    #[must_use]
    pub fn breaker(&self) -> &Arc<CircuitBreaker> {
        &self.breaker
    }
}
