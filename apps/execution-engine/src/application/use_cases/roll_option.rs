//! Roll Option Use Case
//!
//! Handles rolling an option position to a new expiration date.
//! This involves closing the current position and opening a new one.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::dto::{OrderDto, OrderResponseDto};
use crate::application::ports::{
    BrokerPort, EventPublisherPort, RiskRepositoryPort, SubmitOrderRequest,
};
use crate::domain::order_execution::aggregate::{CreateOrderCommand, Order};
use crate::domain::order_execution::errors::OrderError;
use crate::domain::order_execution::repository::OrderRepository;
use crate::domain::order_execution::value_objects::{
    OrderPurpose, OrderSide, OrderType, TimeInForce,
};
use crate::domain::risk_management::services::RiskValidationService;
use crate::domain::shared::{Money, Quantity, Symbol};

/// Request to roll an option position.
#[derive(Debug, Clone)]
pub struct RollOptionRequest {
    /// Symbol of the current position to close.
    pub close_symbol: String,
    /// Symbol of the new position to open.
    pub open_symbol: String,
    /// Quantity to roll (contracts).
    pub quantity: Decimal,
    /// Optional limit price for the closing order.
    pub close_limit_price: Option<Decimal>,
    /// Optional limit price for the opening order.
    pub open_limit_price: Option<Decimal>,
    /// Time in force for both orders.
    pub time_in_force: TimeInForce,
    /// Whether to validate risk before rolling.
    pub validate_risk: bool,
}

/// Response from rolling an option position.
#[derive(Debug)]
pub struct RollOptionResponse {
    /// Whether the roll was successful.
    pub ok: bool,
    /// Close order result.
    pub close_order: Option<OrderResponseDto>,
    /// Open order result.
    pub open_order: Option<OrderResponseDto>,
    /// Risk violations if any.
    pub risk_violations: Vec<String>,
    /// Error message if failed.
    pub error: Option<String>,
}

impl RollOptionResponse {
    /// Create a successful response.
    const fn success(close_order: OrderResponseDto, open_order: OrderResponseDto) -> Self {
        Self {
            ok: true,
            close_order: Some(close_order),
            open_order: Some(open_order),
            risk_violations: vec![],
            error: None,
        }
    }

    /// Create a partial success response (close succeeded, open failed).
    fn partial(close_order: OrderResponseDto, open_error: &str) -> Self {
        Self {
            ok: false,
            close_order: Some(close_order),
            open_order: None,
            risk_violations: vec![],
            error: Some(format!("Close succeeded but open failed: {open_error}")),
        }
    }

    /// Create a risk rejection response.
    const fn risk_rejected(violations: Vec<String>) -> Self {
        Self {
            ok: false,
            close_order: None,
            open_order: None,
            risk_violations: violations,
            error: None,
        }
    }

    /// Create a failure response.
    const fn failed(error: String) -> Self {
        Self {
            ok: false,
            close_order: None,
            open_order: None,
            risk_violations: vec![],
            error: Some(error),
        }
    }
}

/// Use case for rolling an option position to a new expiration.
pub struct RollOptionUseCase<B, R, O, E>
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    broker: Arc<B>,
    risk_repo: Arc<R>,
    order_repo: Arc<O>,
    event_publisher: Arc<E>,
}

impl<B, R, O, E> RollOptionUseCase<B, R, O, E>
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    /// Create a new `RollOptionUseCase`.
    pub const fn new(
        broker: Arc<B>,
        risk_repo: Arc<R>,
        order_repo: Arc<O>,
        event_publisher: Arc<E>,
    ) -> Self {
        Self {
            broker,
            risk_repo,
            order_repo,
            event_publisher,
        }
    }

    /// Execute the roll option use case.
    ///
    /// This creates two orders:
    /// 1. A sell-to-close order for the current position
    /// 2. A buy-to-open order for the new position
    pub async fn execute(&self, request: RollOptionRequest) -> RollOptionResponse {
        // Validate symbols are different
        if request.close_symbol == request.open_symbol {
            return RollOptionResponse::failed(
                "Close and open symbols must be different for a roll".to_string(),
            );
        }

        // Validate quantity
        if request.quantity <= Decimal::ZERO {
            return RollOptionResponse::failed("Quantity must be positive".to_string());
        }

        // Create close order (sell to close)
        let close_order = match Self::create_close_order(&request) {
            Ok(order) => order,
            Err(e) => {
                return RollOptionResponse::failed(format!("Failed to create close order: {e}"));
            }
        };

        // Create open order (buy to open)
        let open_order = match Self::create_open_order(&request) {
            Ok(order) => order,
            Err(e) => {
                return RollOptionResponse::failed(format!("Failed to create open order: {e}"));
            }
        };

        // Validate risk if requested
        if request.validate_risk
            && let Err(violations) = self
                .validate_risk(&[close_order.clone(), open_order.clone()])
                .await
        {
            return RollOptionResponse::risk_rejected(violations);
        }

        // Submit close order first
        let mut close_order = close_order;
        match self.submit_to_broker(&mut close_order).await {
            Ok(()) => {
                // Save close order
                if let Err(e) = self.order_repo.save(&close_order).await {
                    tracing::error!("Failed to save close order: {}", e);
                }

                // Publish close order events
                let events = close_order.drain_events();
                if let Err(e) = self.event_publisher.publish_order_events(events).await {
                    tracing::error!("Failed to publish close order events: {}", e);
                }

                let close_response = OrderResponseDto {
                    order: OrderDto::from_order(&close_order),
                    error: None,
                };

                // Submit open order
                let mut open_order = open_order;
                match self.submit_to_broker(&mut open_order).await {
                    Ok(()) => {
                        // Save open order
                        if let Err(e) = self.order_repo.save(&open_order).await {
                            tracing::error!("Failed to save open order: {}", e);
                        }

                        // Publish open order events
                        let events = open_order.drain_events();
                        if let Err(e) = self.event_publisher.publish_order_events(events).await {
                            tracing::error!("Failed to publish open order events: {}", e);
                        }

                        let open_response = OrderResponseDto {
                            order: OrderDto::from_order(&open_order),
                            error: None,
                        };

                        RollOptionResponse::success(close_response, open_response)
                    }
                    Err(e) => {
                        // Close succeeded but open failed - this is a problematic state
                        tracing::error!(
                            "Roll partial failure: close succeeded but open failed: {}",
                            e
                        );
                        RollOptionResponse::partial(close_response, &e)
                    }
                }
            }
            Err(e) => RollOptionResponse::failed(format!("Failed to submit close order: {e}")),
        }
    }

    /// Create the close order (sell to close).
    fn create_close_order(request: &RollOptionRequest) -> Result<Order, OrderError> {
        let order_type = if request.close_limit_price.is_some() {
            OrderType::Limit
        } else {
            OrderType::Market
        };

        let command = CreateOrderCommand {
            symbol: Symbol::new(&request.close_symbol),
            side: OrderSide::Sell,
            order_type,
            quantity: Quantity::new(request.quantity),
            limit_price: request.close_limit_price.map(Money::new),
            stop_price: None,
            time_in_force: request.time_in_force,
            purpose: OrderPurpose::Exit,
            legs: vec![],
        };

        Order::new(command)
    }

    /// Create the open order (buy to open).
    fn create_open_order(request: &RollOptionRequest) -> Result<Order, OrderError> {
        let order_type = if request.open_limit_price.is_some() {
            OrderType::Limit
        } else {
            OrderType::Market
        };

        let command = CreateOrderCommand {
            symbol: Symbol::new(&request.open_symbol),
            side: OrderSide::Buy,
            order_type,
            quantity: Quantity::new(request.quantity),
            limit_price: request.open_limit_price.map(Money::new),
            stop_price: None,
            time_in_force: request.time_in_force,
            purpose: OrderPurpose::Entry,
            legs: vec![],
        };

        Order::new(command)
    }

    /// Validate orders against risk limits.
    async fn validate_risk(&self, orders: &[Order]) -> Result<(), Vec<String>> {
        let policy = match self.risk_repo.find_active_policy().await {
            Ok(Some(policy)) => policy,
            Ok(None) => {
                tracing::warn!("No active risk policy found, skipping validation");
                return Ok(());
            }
            Err(e) => return Err(vec![format!("Failed to load risk policy: {e}")]),
        };

        let context = match self.risk_repo.build_risk_context().await {
            Ok(ctx) => ctx,
            Err(e) => return Err(vec![format!("Failed to build risk context: {e}")]),
        };

        let service = RiskValidationService::new(policy);
        let result = service.validate(orders, &context);

        if result.passed {
            Ok(())
        } else {
            Err(result.violations.into_iter().map(|v| v.message).collect())
        }
    }

    /// Submit order to broker.
    async fn submit_to_broker(&self, order: &mut Order) -> Result<(), String> {
        let request = SubmitOrderRequest {
            client_order_id: order.id().clone(),
            symbol: order.symbol().clone(),
            side: order.side(),
            order_type: order.order_type(),
            quantity: order.quantity().amount(),
            limit_price: order.limit_price().map(|m| m.amount()),
            stop_price: order.stop_price().map(|m| m.amount()),
            time_in_force: order.time_in_force(),
            extended_hours: false,
        };

        match self.broker.submit_order(request).await {
            Ok(ack) => order.accept(ack.broker_order_id).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}
