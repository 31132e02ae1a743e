//! Option Position Value Objects

mod leg;
mod option_contract;
mod option_position;
mod option_spread;
mod spread_type;

pub use leg::{Leg, LegType, PositionSide};
pub use option_contract::{OptionContract, OptionRight};
pub use option_position::OptionPosition;
pub use option_spread::OptionSpread;
pub use spread_type::SpreadType;
