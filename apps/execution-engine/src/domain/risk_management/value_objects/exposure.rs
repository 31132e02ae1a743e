//! Exposure calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// Portfolio exposure metrics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Exposure {
    /// Gross exposure (sum of absolute values).
    pub gross: Money,
    /// Net exposure (long - short).
    pub net: Money,
    /// Long exposure.
    pub long: Money,
    /// Short exposure.
    pub short: Money,
}

impl Exposure {
    /// Create a new exposure.
    #[must_use]
    pub const fn new(gross: Money, net: Money, long: Money, short: Money) -> Self {
        Self {
            gross,
            net,
            long,
            short,
        }
    }

    /// Create from long and short values.
    #[must_use]
    pub fn from_long_short(long: Money, short: Money) -> Self {
        let long_val = long.amount();
        let short_val = short.amount().abs();
        Self {
            gross: Money::new(long_val + short_val),
            net: Money::new(long_val - short_val),
            long,
            short: Money::new(short_val),
        }
    }

    /// Calculate exposure as percentage of equity.
    #[must_use]
    pub fn as_pct_of_equity(&self, equity: Money) -> ExposurePercent {
        let equity_val = equity.amount();
        if equity_val == Decimal::ZERO {
            return ExposurePercent::default();
        }

        ExposurePercent {
            gross_pct: self.gross.amount() / equity_val,
            net_pct: self.net.amount() / equity_val,
            long_pct: self.long.amount() / equity_val,
            short_pct: self.short.amount().abs() / equity_val,
        }
    }

    /// Add another exposure to this one.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            gross: self.gross + other.gross,
            net: self.net + other.net,
            long: self.long + other.long,
            short: self.short + other.short,
        }
    }
}

/// Exposure as percentage of equity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExposurePercent {
    /// Gross exposure %.
    pub gross_pct: Decimal,
    /// Net exposure %.
    pub net_pct: Decimal,
    /// Long exposure %.
    pub long_pct: Decimal,
    /// Short exposure %.
    pub short_pct: Decimal,
}
