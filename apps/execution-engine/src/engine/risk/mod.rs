//! Risk gate: position sizing, the trading circuit breaker, and the
//! serialized pre-order approval path.

pub mod circuit_breaker;
pub mod gate;
pub mod sizer;

pub use circuit_breaker::CircuitBreaker;
pub use gate::{RiskApproval, RiskGate};
pub use sizer::{PositionSizer, SizingResult};
