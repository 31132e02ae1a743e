//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_execution::value_objects::{
    OrderSide, OrderStatus, OrderType, TimeInForce,
};

/// Response from constraint check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConstraintsResponse {
    /// Whether all constraints passed.
    pub ok: bool,
    /// List of violations (empty if ok).
    pub violations: Vec<ViolationResponse>,
    /// Per-order results (if requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_order: Option<std::collections::HashMap<String, OrderConstraintResult>>,
}

/// A constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationResponse {
    /// Violation code.
    pub code: String,
    /// Severity level.
    pub severity: String,
    /// Human-readable message.
    pub message: String,
    /// Affected instrument (if any).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_id: Option<String>,
    /// The observed value that violated the constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<String>,
    /// The limit that was exceeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

/// Constraint result for a single order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConstraintResult {
    /// Whether constraints passed for this order.
    pub passed: bool,
    /// Violations for this order.
    pub violations: Vec<ViolationResponse>,
}

/// Response from order submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrdersResponse {
    /// Whether all orders were submitted successfully.
    pub ok: bool,
    /// List of submitted orders.
    pub orders: Vec<OrderResponse>,
    /// Error message if failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Risk violations if risk check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_violations: Option<Vec<ViolationResponse>>,
}

/// A submitted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Internal order ID.
    pub order_id: String,
    /// Broker order ID (if accepted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_id: Option<String>,
    /// Symbol.
    pub symbol: String,
    /// Side.
    pub side: OrderSide,
    /// Order type.
    pub order_type: OrderType,
    /// Quantity.
    pub quantity: Decimal,
    /// Limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
    /// Status.
    pub status: OrderStatus,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Filled quantity.
    pub filled_qty: Decimal,
    /// Average fill price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_fill_price: Option<Decimal>,
    /// Error message if rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response from get order state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrderStateResponse {
    /// Orders found.
    pub orders: Vec<OrderResponse>,
    /// Order IDs that were not found.
    pub not_found: Vec<String>,
}

/// Response from cancel orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelOrdersResponse {
    /// Results for each order.
    pub results: Vec<CancelResult>,
}

/// Result of canceling a single order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelResult {
    /// Order ID.
    pub order_id: String,
    /// Whether cancel was successful.
    pub success: bool,
    /// Error message if failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
    /// Additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
