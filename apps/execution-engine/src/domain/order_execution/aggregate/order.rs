//! Order Aggregate Root
//!
//! The Order aggregate manages the complete lifecycle of an order,
//! following FIX protocol semantics for state transitions and partial fills.

use serde::{Deserialize, Serialize};

use super::OrderLine;
use crate::domain::order_execution::errors::OrderError;
use crate::domain::order_execution::events::{
    OrderAccepted, OrderCanceled, OrderEvent, OrderFilled, OrderPartiallyFilled, OrderRejected,
    OrderSubmitted,
};
use crate::domain::order_execution::value_objects::{
    CancelReason, FillReport, OrderPurpose, OrderSide, OrderStatus, OrderType, PartialFillState,
    RejectReason, TimeInForce,
};
use crate::domain::shared::{BrokerId, Money, OrderId, Quantity, Symbol, Timestamp};

/// Command to create a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Symbol to trade.
    pub symbol: Symbol,
    /// Order side.
    pub side: OrderSide,
    /// Order type.
    pub order_type: OrderType,
    /// Quantity to trade.
    pub quantity: Quantity,
    /// Limit price (required for Limit/StopLimit).
    pub limit_price: Option<Money>,
    /// Stop price (required for Stop/StopLimit).
    pub stop_price: Option<Money>,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Order purpose (for timeout policies).
    pub purpose: OrderPurpose,
    /// Order legs (for multi-leg orders).
    pub legs: Vec<OrderLine>,
}

impl CreateOrderCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if required parameters are missing or invalid.
    pub fn validate(&self) -> Result<(), OrderError> {
        // Validate symbol
        self.symbol
            .validate()
            .map_err(|e| OrderError::InvalidParameters {
                field: "symbol".to_string(),
                message: e.to_string(),
            })?;

        // Validate quantity
        self.quantity
            .validate_for_order()
            .map_err(|e| OrderError::InvalidParameters {
                field: "quantity".to_string(),
                message: e.to_string(),
            })?;

        // Validate limit price for limit orders
        if self.order_type.requires_limit_price() && self.limit_price.is_none() {
            return Err(OrderError::InvalidParameters {
                field: "limit_price".to_string(),
                message: "Limit price required for limit orders".to_string(),
            });
        }

        // Validate stop price for stop orders
        if self.order_type.requires_stop_price() && self.stop_price.is_none() {
            return Err(OrderError::InvalidParameters {
                field: "stop_price".to_string(),
                message: "Stop price required for stop orders".to_string(),
            });
        }

        // Validate prices are positive
        if let Some(price) = &self.limit_price {
            price
                .validate_for_order()
                .map_err(|e| OrderError::InvalidParameters {
                    field: "limit_price".to_string(),
                    message: e.to_string(),
                })?;
        }

        if let Some(price) = &self.stop_price {
            price
                .validate_for_order()
                .map_err(|e| OrderError::InvalidParameters {
                    field: "stop_price".to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }
}

/// Order Aggregate Root.
///
/// Manages the complete lifecycle of an order with FIX protocol semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    symbol: Symbol,
    side: OrderSide,
    order_type: OrderType,
    quantity: Quantity,
    limit_price: Option<Money>,
    stop_price: Option<Money>,
    time_in_force: TimeInForce,
    status: OrderStatus,
    partial_fill: PartialFillState,
    broker_order_id: Option<BrokerId>,
    legs: Vec<OrderLine>,
    #[serde(skip)]
    events: Vec<OrderEvent>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Order {
    /// Create a new order from a command.
    ///
    /// Generates an `OrderSubmitted` event.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn new(cmd: CreateOrderCommand) -> Result<Self, OrderError> {
        cmd.validate()?;

        let id = OrderId::generate();
        let now = Timestamp::now();

        let mut order = Self {
            id: id.clone(),
            symbol: cmd.symbol.clone(),
            side: cmd.side,
            order_type: cmd.order_type,
            quantity: cmd.quantity,
            limit_price: cmd.limit_price,
            stop_price: cmd.stop_price,
            time_in_force: cmd.time_in_force,
            status: OrderStatus::New,
            partial_fill: PartialFillState::new(id.clone(), cmd.quantity, cmd.purpose),
            broker_order_id: None,
            legs: cmd.legs,
            events: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        order.events.push(OrderEvent::Submitted(OrderSubmitted {
            order_id: id,
            symbol: cmd.symbol,
            side: cmd.side,
            quantity: cmd.quantity,
            limit_price: cmd.limit_price,
            occurred_at: now,
        }));

        Ok(order)
    }

    /// Reconstitute an order from stored state (no events generated).
    #[must_use]
    pub fn reconstitute(
        id: OrderId,
        symbol: Symbol,
        side: OrderSide,
        order_type: OrderType,
        quantity: Quantity,
        limit_price: Option<Money>,
        stop_price: Option<Money>,
        time_in_force: TimeInForce,
        status: OrderStatus,
        partial_fill: PartialFillState,
        broker_order_id: Option<BrokerId>,
        legs: Vec<OrderLine>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            symbol,
            side,
            order_type,
            quantity,
            limit_price,
            stop_price,
            time_in_force,
            status,
            partial_fill,
            broker_order_id,
            legs,
            events: Vec::new(),
            created_at,
            updated_at,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order ID.
    #[must_use]
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the symbol.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Get the order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Get the order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Get the quantity.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get the limit price.
    #[must_use]
    pub fn limit_price(&self) -> Option<Money> {
        self.limit_price
    }

    /// Get the stop price.
    #[must_use]
    pub fn stop_price(&self) -> Option<Money> {
        self.stop_price
    }

    /// Get the time in force.
    #[must_use]
    pub const fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the partial fill state.
    #[must_use]
    pub fn partial_fill(&self) -> &PartialFillState {
        &self.partial_fill
    }

    /// Get the broker order ID.
    #[must_use]
    pub fn broker_order_id(&self) -> Option<&BrokerId> {
        self.broker_order_id.as_ref()
    }

    /// Get the order legs.
    #[must_use]
    pub fn legs(&self) -> &[OrderLine] {
        &self.legs
    }

    /// Check if this is a multi-leg order.
    #[must_use]
    pub fn is_multi_leg(&self) -> bool {
        !self.legs.is_empty()
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Mark order as accepted by broker.
    ///
    /// Generates an `OrderAccepted` event.
    ///
    /// # Errors
    ///
    /// Returns error if order is not in `New` or `PendingNew` status.
    pub fn accept(&mut self, broker_id: BrokerId) -> Result<(), OrderError> {
        self.ensure_can_transition_to(OrderStatus::Accepted)?;

        self.broker_order_id = Some(broker_id.clone());
        self.status = OrderStatus::Accepted;
        self.updated_at = Timestamp::now();

        for leg in &mut self.legs {
            leg.accept();
        }

        self.events.push(OrderEvent::Accepted(OrderAccepted {
            order_id: self.id.clone(),
            broker_order_id: broker_id,
            occurred_at: self.updated_at,
        }));

        Ok(())
    }

    /// Apply a fill to the order.
    ///
    /// Generates `OrderPartiallyFilled` and/or `OrderFilled` events.
    ///
    /// # Errors
    ///
    /// Returns error if order cannot receive fills or fill violates FIX invariant.
    pub fn apply_fill(&mut self, fill: FillReport) -> Result<(), OrderError> {
        if !self.status.can_fill() {
            return Err(OrderError::CannotFill {
                status: self.status,
            });
        }

        let fill_qty = fill.quantity;
        let fill_price = fill.price;

        self.partial_fill
            .apply_fill(fill)
            .map_err(|e| OrderError::FixInvariantViolation {
                invariant: "FillQty <= LeavesQty".to_string(),
                state: e.to_string(),
            })?;

        self.status = if self.partial_fill.is_filled() {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        };
        self.updated_at = Timestamp::now();

        self.events
            .push(OrderEvent::PartiallyFilled(OrderPartiallyFilled {
                order_id: self.id.clone(),
                fill_quantity: fill_qty,
                fill_price,
                cumulative_quantity: self.partial_fill.cum_qty(),
                leaves_quantity: self.partial_fill.leaves_qty(),
                vwap: self.partial_fill.avg_px(),
                occurred_at: self.updated_at,
            }));

        if self.status == OrderStatus::Filled {
            self.events.push(OrderEvent::Filled(OrderFilled {
                order_id: self.id.clone(),
                total_quantity: self.quantity,
                average_price: self.partial_fill.avg_px(),
                occurred_at: self.updated_at,
            }));
        }

        Ok(())
    }

    /// Cancel the order.
    ///
    /// Generates an `OrderCanceled` event.
    ///
    /// # Errors
    ///
    /// Returns error if order cannot be canceled.
    pub fn cancel(&mut self, reason: CancelReason) -> Result<(), OrderError> {
        if !self.status.is_cancelable() {
            return Err(OrderError::CannotCancel {
                status: self.status,
            });
        }

        let filled_qty = self.partial_fill.cum_qty();
        self.status = OrderStatus::Canceled;
        self.updated_at = Timestamp::now();

        for leg in &mut self.legs {
            leg.cancel();
        }

        self.events.push(OrderEvent::Canceled(OrderCanceled {
            order_id: self.id.clone(),
            reason,
            filled_quantity: filled_qty,
            occurred_at: self.updated_at,
        }));

        Ok(())
    }

    /// Reject the order.
    ///
    /// Generates an `OrderRejected` event.
    ///
    /// # Errors
    ///
    /// Returns error if order is not in a rejectable state.
    pub fn reject(&mut self, reason: RejectReason) -> Result<(), OrderError> {
        if !matches!(self.status, OrderStatus::New | OrderStatus::PendingNew) {
            return Err(OrderError::InvalidStateTransition {
                from: self.status,
                to: OrderStatus::Rejected,
                reason: "Can only reject new orders".to_string(),
            });
        }

        self.status = OrderStatus::Rejected;
        self.updated_at = Timestamp::now();

        for leg in &mut self.legs {
            leg.reject();
        }

        self.events.push(OrderEvent::Rejected(OrderRejected {
            order_id: self.id.clone(),
            reason,
            occurred_at: self.updated_at,
        }));

        Ok(())
    }

    /// Mark order as expired.
    ///
    /// # Errors
    ///
    /// Returns error if order is in a terminal state.
    pub fn expire(&mut self) -> Result<(), OrderError> {
        if self.status.is_terminal() {
            return Err(OrderError::InvalidStateTransition {
                from: self.status,
                to: OrderStatus::Expired,
                reason: "Cannot expire a terminal order".to_string(),
            });
        }

        self.status = OrderStatus::Expired;
        self.updated_at = Timestamp::now();

        // Expiration uses the canceled event with special reason
        self.events.push(OrderEvent::Canceled(OrderCanceled {
            order_id: self.id.clone(),
            reason: CancelReason::end_of_day(),
            filled_quantity: self.partial_fill.cum_qty(),
            occurred_at: self.updated_at,
        }));

        Ok(())
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Drain accumulated domain events.
    pub fn drain_events(&mut self) -> Vec<OrderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Get pending events without draining.
    #[must_use]
    pub fn pending_events(&self) -> &[OrderEvent] {
        &self.events
    }

    // ========================================================================
    // Private Helpers
    // ========================================================================

    fn ensure_can_transition_to(&self, target: OrderStatus) -> Result<(), OrderError> {
        let valid = match (self.status, target) {
            (OrderStatus::New, OrderStatus::Accepted) => true,
            (OrderStatus::New, OrderStatus::Rejected) => true,
            (OrderStatus::New, OrderStatus::Canceled) => true,
            (OrderStatus::PendingNew, OrderStatus::Accepted) => true,
            (OrderStatus::PendingNew, OrderStatus::Rejected) => true,
            (OrderStatus::Accepted, OrderStatus::PartiallyFilled) => true,
            (OrderStatus::Accepted, OrderStatus::Filled) => true,
            (OrderStatus::Accepted, OrderStatus::Canceled) => true,
            (OrderStatus::PartiallyFilled, OrderStatus::PartiallyFilled) => true,
            (OrderStatus::PartiallyFilled, OrderStatus::Filled) => true,
            (OrderStatus::PartiallyFilled, OrderStatus::Canceled) => true,
            _ => false,
        };

        if valid {
            Ok(())
        } else {
            Err(OrderError::InvalidStateTransition {
                from: self.status,
                to: target,
                reason: "Invalid state transition".to_string(),
            })
        }
    }
}
