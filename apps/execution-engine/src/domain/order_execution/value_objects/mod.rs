//! Order Execution Value Objects
//!
//! Immutable types for order management.

mod execution_ack;
mod fill_report;
mod order_purpose;
mod order_side;
mod order_status;
mod order_type;
mod partial_fill;
mod reasons;
mod time_in_force;

pub use execution_ack::ExecutionAck;
pub use fill_report::FillReport;
pub use order_purpose::OrderPurpose;
pub use order_side::OrderSide;
pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use partial_fill::{PartialFillState, PartialFillTimeoutAction, PartialFillTimeoutConfig};
pub use reasons::{CancelReason, RejectReason};
pub use time_in_force::TimeInForce;
