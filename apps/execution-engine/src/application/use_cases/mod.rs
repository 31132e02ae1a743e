//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod cancel_orders;
mod monitor_stops;
mod reconcile;
mod roll_option;
mod submit_orders;
mod validate_risk;

pub use cancel_orders::CancelOrdersUseCase;
pub use monitor_stops::MonitorStopsUseCase;
pub use reconcile::ReconcileUseCase;
pub use roll_option::{RollOptionRequest, RollOptionResponse, RollOptionUseCase};
pub use submit_orders::SubmitOrdersUseCase;
pub use validate_risk::ValidateRiskUseCase;
