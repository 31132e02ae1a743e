//! Reconcile Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::ports::BrokerPort;
use crate::domain::order_execution::repository::OrderRepository;
use crate::domain::order_execution::value_objects::{FillReport, OrderStatus};
use crate::domain::shared::{BrokerId, Money, Quantity, Timestamp};

/// Reconciliation result for a single order.
#[derive(Debug, Clone)]
pub struct OrderReconciliation {
    /// Order ID.
    pub order_id: String,
    /// Broker order ID.
    pub broker_order_id: String,
    /// Local status.
    pub local_status: OrderStatus,
    /// Broker status.
    pub broker_status: OrderStatus,
    /// Whether statuses match.
    pub status_match: bool,
    /// Local filled quantity.
    pub local_filled_qty: Decimal,
    /// Broker filled quantity.
    pub broker_filled_qty: Decimal,
    /// Whether filled quantities match.
    pub qty_match: bool,
    /// Actions taken.
    pub actions: Vec<String>,
}

/// Overall reconciliation result.
#[derive(Debug, Clone)]
pub struct ReconciliationResult {
    /// Total orders checked.
    pub total_checked: usize,
    /// Orders with mismatches.
    pub mismatches: usize,
    /// Orders successfully reconciled.
    pub reconciled: usize,
    /// Per-order results.
    pub order_results: Vec<OrderReconciliation>,
    /// Any errors that occurred.
    pub errors: Vec<String>,
}

impl ReconciliationResult {
    /// Check if reconciliation was fully successful.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.mismatches == 0 && self.errors.is_empty()
    }
}

/// Use case for reconciling local order state with broker.
pub struct ReconcileUseCase<B, O>
where
    B: BrokerPort,
    O: OrderRepository,
{
    broker: Arc<B>,
    order_repo: Arc<O>,
}

impl<B, O> ReconcileUseCase<B, O>
where
    B: BrokerPort,
    O: OrderRepository,
{
    /// Create a new ReconcileUseCase.
    pub fn new(broker: Arc<B>, order_repo: Arc<O>) -> Self {
        Self { broker, order_repo }
    }

    /// Execute full reconciliation.
    pub async fn execute(&self) -> ReconciliationResult {
        let mut result = ReconciliationResult {
            total_checked: 0,
            mismatches: 0,
            reconciled: 0,
            order_results: vec![],
            errors: vec![],
        };

        // 1. Get all open orders from local repo
        let local_orders = match self.order_repo.find_active().await {
            Ok(orders) => orders,
            Err(e) => {
                result
                    .errors
                    .push(format!("Failed to load local orders: {}", e));
                return result;
            }
        };

        // 2. Get all open orders from broker
        let broker_orders = match self.broker.get_open_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                result
                    .errors
                    .push(format!("Failed to load broker orders: {}", e));
                return result;
            }
        };

        // 3. Build broker order lookup
        let broker_map: std::collections::HashMap<String, _> = broker_orders
            .into_iter()
            .map(|o| (o.client_order_id.to_string(), o))
            .collect();

        // 4. Reconcile each local order
        for mut order in local_orders {
            result.total_checked += 1;

            let broker_id = match order.broker_order_id() {
                Some(id) => id.clone(),
                None => {
                    // Order was never submitted to broker
                    continue;
                }
            };

            // Find matching broker order
            let broker_order = broker_map.get(order.id().as_str());

            let local_filled = order.partial_fill().cum_qty().amount();
            let broker_filled = broker_order.map(|o| o.filled_qty).unwrap_or(Decimal::ZERO);

            let mut reconciliation = OrderReconciliation {
                order_id: order.id().to_string(),
                broker_order_id: broker_id.to_string(),
                local_status: order.status(),
                broker_status: broker_order
                    .map(|o| o.status)
                    .unwrap_or(OrderStatus::Canceled),
                status_match: false,
                local_filled_qty: local_filled,
                broker_filled_qty: broker_filled,
                qty_match: false,
                actions: vec![],
            };

            // Check status match
            reconciliation.status_match = broker_order
                .map(|o| o.status == order.status())
                .unwrap_or(false);

            // Check quantity match
            reconciliation.qty_match = broker_filled == local_filled;

            // Apply corrections
            if let Some(broker_ack) = broker_order {
                // Update filled quantity if different
                if !reconciliation.qty_match && broker_ack.filled_qty > local_filled {
                    let fill_qty = broker_ack.filled_qty - local_filled;
                    let fill_price = broker_ack.avg_fill_price.unwrap_or(Decimal::ZERO);

                    let fill_report = FillReport::new(
                        format!("reconcile-{}", order.id()),
                        Quantity::new(fill_qty),
                        Money::new(fill_price),
                        Timestamp::now(),
                        "RECONCILE",
                    );

                    if let Err(e) = order.apply_fill(fill_report) {
                        result.errors.push(format!(
                            "Failed to apply fill to {}: {}",
                            order.id(),
                            e
                        ));
                    } else {
                        reconciliation
                            .actions
                            .push(format!("Applied fill: {} @ {}", fill_qty, fill_price));
                    }
                }

                // Save updated order
                if !reconciliation.actions.is_empty() {
                    if let Err(e) = self.order_repo.save(&order).await {
                        result.errors.push(format!(
                            "Failed to save reconciled order {}: {}",
                            order.id(),
                            e
                        ));
                    } else {
                        result.reconciled += 1;
                    }
                }
            }

            if !reconciliation.status_match || !reconciliation.qty_match {
                result.mismatches += 1;
            }

            result.order_results.push(reconciliation);
        }

        result
    }

    /// Reconcile a single order by ID.
    pub async fn reconcile_order(
        &self,
        broker_order_id: &BrokerId,
    ) -> Result<OrderReconciliation, String> {
        // Get broker order state
        let broker_ack = self
            .broker
            .get_order(broker_order_id)
            .await
            .map_err(|e| format!("Failed to get broker order: {}", e))?;

        // Find local order
        let mut order = self
            .order_repo
            .find_by_broker_id(broker_order_id)
            .await
            .map_err(|e| format!("Failed to find local order: {}", e))?
            .ok_or_else(|| "Order not found locally".to_string())?;

        let local_filled = order.partial_fill().cum_qty().amount();

        let mut reconciliation = OrderReconciliation {
            order_id: order.id().to_string(),
            broker_order_id: broker_order_id.to_string(),
            local_status: order.status(),
            broker_status: broker_ack.status,
            status_match: broker_ack.status == order.status(),
            local_filled_qty: local_filled,
            broker_filled_qty: broker_ack.filled_qty,
            qty_match: broker_ack.filled_qty == local_filled,
            actions: vec![],
        };

        // Apply fill correction if needed
        if !reconciliation.qty_match && broker_ack.filled_qty > local_filled {
            let fill_qty = broker_ack.filled_qty - local_filled;
            let fill_price = broker_ack.avg_fill_price.unwrap_or(Decimal::ZERO);

            let fill_report = FillReport::new(
                format!("reconcile-{}", order.id()),
                Quantity::new(fill_qty),
                Money::new(fill_price),
                Timestamp::now(),
                "RECONCILE",
            );

            order
                .apply_fill(fill_report)
                .map_err(|e| format!("Failed to apply fill: {}", e))?;

            reconciliation
                .actions
                .push(format!("Applied fill: {} @ {}", fill_qty, fill_price));

            // Save
            self.order_repo
                .save(&order)
                .await
                .map_err(|e| format!("Failed to save order: {}", e))?;
        }

        Ok(reconciliation)
    }
}
