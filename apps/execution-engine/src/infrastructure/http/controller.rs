//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::dto::{CreateOrderDto, OrderDto, SubmitOrdersRequestDto};
use crate::application::ports::{BrokerPort, EventPublisherPort, RiskRepositoryPort};
use crate::application::use_cases::{
    CancelOrdersUseCase, SubmitOrdersUseCase, ValidateRiskUseCase,
};
use crate::domain::order_execution::repository::OrderRepository;
use crate::domain::order_execution::value_objects::CancelReason;
use crate::domain::shared::OrderId;

use super::request::{
    CancelOrdersRequest, CheckConstraintsRequest, GetOrderStateRequest, SubmitOrdersRequest,
};
use super::response::{
    CancelOrdersResponse, CancelResult, CheckConstraintsResponse, GetOrderStateResponse,
    HealthResponse, OrderConstraintResult, OrderResponse, SubmitOrdersResponse, ViolationResponse,
};

/// Application state shared across handlers.
pub struct AppState<B, R, O, E>
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    /// Use case for submitting orders.
    pub submit_orders: Arc<SubmitOrdersUseCase<B, R, O, E>>,
    /// Use case for validating risk.
    pub validate_risk: Arc<ValidateRiskUseCase<R, O>>,
    /// Use case for canceling orders.
    pub cancel_orders: Arc<CancelOrdersUseCase<B, O, E>>,
    /// Order repository for queries.
    pub order_repo: Arc<O>,
    /// Application version.
    pub version: String,
}

impl<B, R, O, E> Clone for AppState<B, R, O, E>
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    fn clone(&self) -> Self {
        Self {
            submit_orders: Arc::clone(&self.submit_orders),
            validate_risk: Arc::clone(&self.validate_risk),
            cancel_orders: Arc::clone(&self.cancel_orders),
            order_repo: Arc::clone(&self.order_repo),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<B, R, O, E>(state: AppState<B, R, O, E>) -> Router
where
    B: BrokerPort + 'static,
    R: RiskRepositoryPort + 'static,
    O: OrderRepository + 'static,
    E: EventPublisherPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/check-constraints", post(check_constraints))
        .route("/api/v1/submit-orders", post(submit_orders))
        .route("/api/v1/orders", post(get_order_state))
        .route("/api/v1/cancel-orders", post(cancel_orders))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<B, R, O, E>(State(state): State<AppState<B, R, O, E>>) -> impl IntoResponse
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version,
    })
}

/// Check constraints endpoint.
async fn check_constraints<B, R, O, E>(
    State(state): State<AppState<B, R, O, E>>,
    Json(request): Json<CheckConstraintsRequest>,
) -> impl IntoResponse
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    // Convert decisions to orders for validation
    let orders: Vec<CreateOrderDto> = request
        .decisions
        .into_iter()
        .map(|d| CreateOrderDto {
            client_order_id: format!("{}-{}", request.cycle_id, d.symbol),
            symbol: d.symbol,
            side: d.side,
            order_type: d.order_type,
            quantity: d.quantity,
            limit_price: d.limit_price,
            time_in_force: d.time_in_force,
            purpose: d.purpose,
        })
        .collect();

    // Create request DTO
    let dto = SubmitOrdersRequestDto {
        orders,
        validate_risk: true,
    };

    // Execute validation through submit_orders (dry run would require separate use case)
    // For now, we validate by calling validate_orders
    let order_ids: Vec<String> = dto
        .orders
        .iter()
        .map(|o| o.client_order_id.clone())
        .collect();

    let validation_request = crate::application::dto::ConstraintCheckRequestDto {
        order_ids,
        include_portfolio_context: request.include_portfolio_context,
    };

    match state.validate_risk.execute(validation_request).await {
        Ok(result) => {
            let violations: Vec<ViolationResponse> = result
                .result
                .violations
                .into_iter()
                .map(|v| ViolationResponse {
                    code: v.code,
                    severity: v.severity,
                    message: v.message,
                    instrument_id: v.instrument_id,
                    observed: v.observed,
                    limit: v.limit,
                })
                .collect();

            let per_order = if result.per_order_results.is_empty() {
                None
            } else {
                Some(
                    result
                        .per_order_results
                        .into_iter()
                        .map(|(id, r)| {
                            (
                                id,
                                OrderConstraintResult {
                                    passed: r.passed,
                                    violations: r
                                        .violations
                                        .into_iter()
                                        .map(|v| ViolationResponse {
                                            code: v.code,
                                            severity: v.severity,
                                            message: v.message,
                                            instrument_id: v.instrument_id,
                                            observed: v.observed,
                                            limit: v.limit,
                                        })
                                        .collect(),
                                },
                            )
                        })
                        .collect(),
                )
            };

            (
                StatusCode::OK,
                Json(CheckConstraintsResponse {
                    ok: result.result.passed,
                    violations,
                    per_order,
                }),
            )
        }
        Err(e) => (
            StatusCode::OK,
            Json(CheckConstraintsResponse {
                ok: false,
                violations: vec![ViolationResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    severity: "Error".to_string(),
                    message: e,
                    instrument_id: None,
                    observed: None,
                    limit: None,
                }],
                per_order: None,
            }),
        ),
    }
}

/// Submit orders endpoint.
async fn submit_orders<B, R, O, E>(
    State(state): State<AppState<B, R, O, E>>,
    Json(request): Json<SubmitOrdersRequest>,
) -> impl IntoResponse
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    // Convert decisions to create order DTOs
    let orders: Vec<CreateOrderDto> = request
        .decisions
        .into_iter()
        .map(|d| CreateOrderDto {
            client_order_id: format!("{}-{}", request.cycle_id, d.symbol),
            symbol: d.symbol,
            side: d.side,
            order_type: d.order_type,
            quantity: d.quantity,
            limit_price: d.limit_price,
            time_in_force: d.time_in_force,
            purpose: d.purpose,
        })
        .collect();

    let dto = SubmitOrdersRequestDto {
        orders,
        validate_risk: true,
    };

    let result = state.submit_orders.execute(dto).await;

    // Convert result to response
    let orders_response: Vec<OrderResponse> = result
        .submitted
        .into_iter()
        .chain(result.rejected)
        .map(|r| OrderResponse {
            order_id: r.order.order_id,
            broker_id: r.order.broker_id,
            symbol: r.order.symbol,
            side: r.order.side,
            order_type: r.order.order_type,
            quantity: r.order.quantity,
            limit_price: r.order.limit_price,
            status: r.order.status,
            time_in_force: r.order.time_in_force,
            filled_qty: r.order.filled_qty,
            avg_fill_price: r.order.avg_fill_price,
            error: r.error,
        })
        .collect();

    let risk_violations = if result.risk_violations.is_empty() {
        None
    } else {
        Some(
            result
                .risk_violations
                .into_iter()
                .map(|msg| ViolationResponse {
                    code: "RISK_VIOLATION".to_string(),
                    severity: "Error".to_string(),
                    message: msg,
                    instrument_id: None,
                    observed: None,
                    limit: None,
                })
                .collect(),
        )
    };

    (
        StatusCode::OK,
        Json(SubmitOrdersResponse {
            ok: result.success,
            orders: orders_response,
            error: None,
            risk_violations,
        }),
    )
}

/// Get order state endpoint.
async fn get_order_state<B, R, O, E>(
    State(state): State<AppState<B, R, O, E>>,
    Json(request): Json<GetOrderStateRequest>,
) -> impl IntoResponse
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    let mut orders = Vec::new();
    let mut not_found = Vec::new();

    for order_id in request.order_ids {
        let id = OrderId::new(&order_id);
        match state.order_repo.find_by_id(&id).await {
            Ok(Some(order)) => {
                let dto = OrderDto::from_order(&order);
                orders.push(OrderResponse {
                    order_id: dto.order_id,
                    broker_id: dto.broker_id,
                    symbol: dto.symbol,
                    side: dto.side,
                    order_type: dto.order_type,
                    quantity: dto.quantity,
                    limit_price: dto.limit_price,
                    status: dto.status,
                    time_in_force: dto.time_in_force,
                    filled_qty: dto.filled_qty,
                    avg_fill_price: dto.avg_fill_price,
                    error: None,
                });
            }
            Ok(None) => not_found.push(order_id),
            Err(e) => {
                tracing::error!("Failed to load order {}: {}", order_id, e);
                not_found.push(order_id);
            }
        }
    }

    (
        StatusCode::OK,
        Json(GetOrderStateResponse { orders, not_found }),
    )
}

/// Cancel orders endpoint.
async fn cancel_orders<B, R, O, E>(
    State(state): State<AppState<B, R, O, E>>,
    Json(request): Json<CancelOrdersRequest>,
) -> impl IntoResponse
where
    B: BrokerPort,
    R: RiskRepositoryPort,
    O: OrderRepository,
    E: EventPublisherPort,
{
    let reason = request
        .reason
        .map_or_else(CancelReason::user_requested, |r| CancelReason::new(&r, &r));

    let results = state
        .cancel_orders
        .cancel_orders(&request.order_ids, reason)
        .await;

    let response_results: Vec<CancelResult> = results
        .into_iter()
        .map(|r| CancelResult {
            order_id: r.order_id,
            success: r.success,
            error: r.error,
        })
        .collect();

    (
        StatusCode::OK,
        Json(CancelOrdersResponse {
            results: response_results,
        }),
    )
}
