//! Trading circuit breaker: daily-loss / consecutive-loss pause gate.
//!
//! Knows nothing about network errors or broker/feed connectivity; it only
//! tracks realized trading P&L for the day and trips trading, not calls.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU32, Ordering};

use rust_decimal::Decimal;

use crate::domain::shared::Money;
use crate::engine::config::RiskConfig;
use crate::engine::order_record::TradeRecord;

/// Scale used to store `daily_realized_pnl` as integer cents in an atomic.
const CENTS_SCALE: i64 = 100;

/// Daily-loss and consecutive-loss trading pause gate.
///
/// All fields are atomics so the breaker can be shared behind an `Arc`
/// without an additional lock; the [`RiskGate`](super::gate::RiskGate)
/// still serializes the check-then-submit sequence as a whole.
pub struct CircuitBreaker {
    start_of_day_equity_cents: AtomicI64,
    daily_realized_pnl_cents: AtomicI64,
    consecutive_losses: AtomicU32,
    paused: AtomicBool,
    pause_reason: std::sync::RwLock<Option<String>>,
    consecutive_loss_pause: u32,
    max_daily_loss_pct: Decimal,
}

fn to_cents(amount: Decimal) -> i64 {
    (amount * Decimal::from(CENTS_SCALE))
        .round()
        .try_into()
        .unwrap_or(i64::MAX)
}

fn from_cents(cents: i64) -> Decimal {
    Decimal::from(cents) / Decimal::from(CENTS_SCALE)
}

impl CircuitBreaker {
    /// Build a breaker from the risk configuration's daily-loss and
    /// consecutive-loss thresholds.
    #[must_use]
    pub fn new(config: &RiskConfig) -> Self {
        Self {
            start_of_day_equity_cents: AtomicI64::new(0),
            daily_realized_pnl_cents: AtomicI64::new(0),
            consecutive_losses: AtomicU32::new(0),
            paused: AtomicBool::new(false),
            pause_reason: std::sync::RwLock::new(None),
            consecutive_loss_pause: config.consecutive_loss_pause,
            max_daily_loss_pct: config.max_daily_loss_pct,
        }
    }

    /// Called once at market open: clears all counters for the new day.
    pub fn reset_daily(&self, equity: Money) {
        self.start_of_day_equity_cents
            .store(to_cents(equity.amount()), Ordering::SeqCst);
        self.daily_realized_pnl_cents.store(0, Ordering::SeqCst);
        self.consecutive_losses.store(0, Ordering::SeqCst);
        self.paused.store(false, Ordering::SeqCst);
        *self.pause_reason.write().expect("lock poisoned") = None;
    }

    /// Record one closed trade's P&L and re-evaluate both limits.
    ///
    /// A break-even trade (`pnl == 0`) counts as a loss for the
    /// consecutive-loss counter. Once paused, a later win never un-pauses
    /// the breaker; only [`Self::reset_daily`] does.
    pub fn record_trade(&self, pnl: Money) {
        let prev = self.daily_realized_pnl_cents.load(Ordering::SeqCst);
        let updated = prev + to_cents(pnl.amount());
        self.daily_realized_pnl_cents.store(updated, Ordering::SeqCst);

        if pnl.amount() <= Decimal::ZERO {
            self.consecutive_losses.fetch_add(1, Ordering::SeqCst);
        } else {
            self.consecutive_losses.store(0, Ordering::SeqCst);
        }

        if self.paused.load(Ordering::SeqCst) {
            return;
        }

        let losses = self.consecutive_losses.load(Ordering::SeqCst);
        if losses >= self.consecutive_loss_pause {
            self.trip(format!("Consecutive loss limit reached: {losses}"));
            return;
        }

        let start_equity = from_cents(self.start_of_day_equity_cents.load(Ordering::SeqCst));
        let threshold = start_equity * self.max_daily_loss_pct;
        let realized = from_cents(updated);
        if realized <= -threshold {
            self.trip(format!(
                "Daily loss limit reached: {realized} <= -{threshold}"
            ));
        }
    }

    fn trip(&self, reason: String) {
        self.paused.store(true, Ordering::SeqCst);
        *self.pause_reason.write().expect("lock poisoned") = Some(reason);
    }

    /// Whether trading is currently allowed, with a reason when it is not.
    #[must_use]
    pub fn can_trade(&self) -> (bool, Option<String>) {
        if self.paused.load(Ordering::SeqCst) {
            (false, self.pause_reason.read().expect("lock poisoned").clone())
        } else {
            (true, None)
        }
    }

    /// Current cumulative realized P&L for the day.
    #[must_use]
    pub fn daily_realized_pnl(&self) -> Money {
        Money::new(from_cents(self.daily_realized_pnl_cents.load(Ordering::SeqCst)))
    }

    /// Current consecutive-loss streak.
    #[must_use]
    pub fn consecutive_losses(&self) -> u32 {
        self.consecutive_losses.load(Ordering::SeqCst)
    }

    /// Rebuild breaker state from today's closed trades after a restart,
    /// by resetting and replaying `record_trade` in chronological order.
    pub fn reconstruct_from_trades(&self, today_trades: &[TradeRecord], equity: Money) {
        self.reset_daily(equity);
        for trade in today_trades {
            self.record_trade(trade.pnl);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{CorrelationId, Symbol, Timestamp};
    use rust_decimal_macros::dec;

    fn config() -> RiskConfig {
        RiskConfig {
            consecutive_loss_pause: 3,
            max_daily_loss_pct: dec!(0.03),
            ..RiskConfig::default()
        }
    }

    #[test]
    fn starts_unpaused_and_allows_trading() {
        let breaker = CircuitBreaker::new(&config());
        breaker.reset_daily(Money::new(dec!(25000)));
        let (allowed, reason) = breaker.can_trade();
        assert!(allowed);
        assert!(reason.is_none());
    }

    #[test]
    fn three_consecutive_losses_trip_the_breaker() {
        let breaker = CircuitBreaker::new(&config());
        breaker.reset_daily(Money::new(dec!(25000)));
        for _ in 0..3 {
            breaker.record_trade(Money::new(dec!(-100)));
        }
        let (allowed, reason) = breaker.can_trade();
        assert!(!allowed);
        assert!(reason.unwrap().contains("Consecutive loss limit"));
    }

    #[test]
    fn break_even_trade_counts_as_a_loss() {
        let breaker = CircuitBreaker::new(&config());
        breaker.reset_daily(Money::new(dec!(25000)));
        breaker.record_trade(Money::ZERO);
        breaker.record_trade(Money::ZERO);
        breaker.record_trade(Money::ZERO);
        assert!(!breaker.can_trade().0);
    }

    #[test]
    fn a_win_resets_the_consecutive_counter() {
        let breaker = CircuitBreaker::new(&config());
        breaker.reset_daily(Money::new(dec!(25000)));
        breaker.record_trade(Money::new(dec!(-50)));
        breaker.record_trade(Money::new(dec!(-50)));
        breaker.record_trade(Money::new(dec!(10)));
        assert_eq!(breaker.consecutive_losses(), 0);
        assert!(breaker.can_trade().0);
    }

    #[test]
    fn daily_loss_limit_trips_regardless_of_streak() {
        let breaker = CircuitBreaker::new(&config());
        breaker.reset_daily(Money::new(dec!(25000)));
        breaker.record_trade(Money::new(dec!(100)));
        breaker.record_trade(Money::new(dec!(-900)));
        assert!(!breaker.can_trade().0);
    }

    #[test]
    fn once_paused_a_later_win_does_not_unpause() {
        let breaker = CircuitBreaker::new(&config());
        breaker.reset_daily(Money::new(dec!(25000)));
        for _ in 0..3 {
            breaker.record_trade(Money::new(dec!(-100)));
        }
        assert!(!breaker.can_trade().0);
        breaker.record_trade(Money::new(dec!(500)));
        assert!(!breaker.can_trade().0);
    }

    #[test]
    fn reset_daily_clears_pause_and_counters() {
        let breaker = CircuitBreaker::new(&config());
        breaker.reset_daily(Money::new(dec!(25000)));
        for _ in 0..3 {
            breaker.record_trade(Money::new(dec!(-100)));
        }
        assert!(!breaker.can_trade().0);
        breaker.reset_daily(Money::new(dec!(24700)));
        assert!(breaker.can_trade().0);
        assert_eq!(breaker.consecutive_losses(), 0);
    }

    #[test]
    fn reconstruct_from_trades_replays_in_order() {
        let breaker = CircuitBreaker::new(&config());
        let trades: Vec<TradeRecord> = (0..3)
            .map(|_| {
                TradeRecord::close_long(
                    CorrelationId::generate(),
                    Symbol::new("AAPL"),
                    crate::domain::shared::Quantity::from_i64(10),
                    Money::usd(100.0),
                    Money::usd(90.0),
                    Timestamp::now(),
                    Timestamp::now(),
                    None,
                    Money::ZERO,
                )
                .unwrap()
            })
            .collect();
        breaker.reconstruct_from_trades(&trades, Money::new(dec!(25000)));
        assert!(!breaker.can_trade().0);
    }
}
