//! Price Monitor Domain Service

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::domain::shared::{InstrumentId, OrderId, Timestamp};
use crate::domain::stop_enforcement::value_objects::{
    MonitoredPosition, PositionDirection, StopTargetLevels, StopsConfig, TriggerResult,
};

/// Price monitor for real-time stop/target enforcement.
///
/// Used for options positions where bracket orders aren't supported.
#[derive(Debug)]
pub struct PriceMonitor {
    /// Configuration.
    config: StopsConfig,
    /// Positions being monitored.
    positions: HashMap<String, MonitoredPosition>,
}

impl Default for PriceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceMonitor {
    /// Create a new price monitor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: StopsConfig::default(),
            positions: HashMap::new(),
        }
    }

    /// Create with custom configuration.
    #[must_use]
    pub fn with_config(config: StopsConfig) -> Self {
        Self {
            config,
            positions: HashMap::new(),
        }
    }

    /// Add a position to monitor.
    pub fn add_position(&mut self, position: MonitoredPosition) {
        self.positions
            .insert(position.position_id().to_string(), position);
    }

    /// Remove a position from monitoring.
    pub fn remove_position(&mut self, position_id: &OrderId) -> Option<MonitoredPosition> {
        self.positions.remove(position_id.as_str())
    }

    /// Get a position by ID.
    #[must_use]
    pub fn get_position(&self, position_id: &OrderId) -> Option<&MonitoredPosition> {
        self.positions.get(position_id.as_str())
    }

    /// Check a price update against all monitored positions.
    ///
    /// Returns a list of (`position_id`, `trigger_result`) for any triggers.
    #[must_use]
    pub fn check_price(
        &self,
        instrument_id: &InstrumentId,
        price: Decimal,
    ) -> Vec<(OrderId, TriggerResult)> {
        let timestamp = Timestamp::now();
        let mut triggers = Vec::new();

        for position in self.positions.values() {
            if !position.is_active() || position.instrument_id() != instrument_id {
                continue;
            }

            let result = Self::check_price_trigger(price, position.levels(), timestamp);
            if result != TriggerResult::None {
                triggers.push((position.position_id().clone(), result));
            }
        }

        triggers
    }

    /// Check if a price triggers stop or target.
    fn check_price_trigger(
        price: Decimal,
        levels: &StopTargetLevels,
        timestamp: Timestamp,
    ) -> TriggerResult {
        match levels.direction {
            PositionDirection::Long => {
                if price <= levels.stop_loss {
                    TriggerResult::StopLoss {
                        price: levels.stop_loss,
                        timestamp,
                    }
                } else if price >= levels.take_profit {
                    TriggerResult::TakeProfit {
                        price: levels.take_profit,
                        timestamp,
                    }
                } else {
                    TriggerResult::None
                }
            }
            PositionDirection::Short => {
                if price >= levels.stop_loss {
                    TriggerResult::StopLoss {
                        price: levels.stop_loss,
                        timestamp,
                    }
                } else if price <= levels.take_profit {
                    TriggerResult::TakeProfit {
                        price: levels.take_profit,
                        timestamp,
                    }
                } else {
                    TriggerResult::None
                }
            }
        }
    }

    /// Get the monitoring interval.
    #[must_use]
    pub const fn monitoring_interval_ms(&self) -> u64 {
        self.config.monitoring_interval_ms
    }

    /// Get count of active monitored positions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.positions.values().filter(|p| p.is_active()).count()
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &StopsConfig {
        &self.config
    }

    /// Get all monitored positions.
    pub fn positions(&self) -> impl Iterator<Item = &MonitoredPosition> {
        self.positions.values()
    }
}
