//! Risk Management Value Objects

mod constraint_result;
mod exposure;
mod exposure_limits;
mod greeks;
mod risk_context;

pub use constraint_result::{ConstraintResult, ConstraintViolation, ViolationSeverity};
pub use exposure::Exposure;
pub use exposure_limits::{
    ExposureLimits, OptionsLimits, PerInstrumentLimits, PortfolioLimits, SizingLimits,
};
pub use greeks::Greeks;
pub use risk_context::{PdtStatus, PendingOrderContext, PositionContext, RiskContext};
