//! Stop Enforcement Value Objects

mod monitored_position;
mod stop_config;
mod stop_target_levels;
mod trigger_result;

pub use monitored_position::MonitoredPosition;
pub use stop_config::{RiskLevelDenomination, SameBarPriority, StopsConfig};
pub use stop_target_levels::{PositionDirection, StopTargetLevels};
pub use trigger_result::TriggerResult;
