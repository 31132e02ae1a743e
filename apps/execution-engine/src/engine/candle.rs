//! Streaming bar -> candle aggregation.

use chrono::{DateTime, Datelike, Duration as ChronoDuration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, Symbol, Timestamp};

/// One exchange-reported price bar (the smallest unit the feed delivers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Instrument this bar belongs to.
    pub symbol: Symbol,
    /// UTC timestamp for the bar.
    pub timestamp: Timestamp,
    /// Opening price.
    pub open: Money,
    /// High price.
    pub high: Money,
    /// Low price.
    pub low: Money,
    /// Closing price.
    pub close: Money,
    /// Volume traded during the bar.
    pub volume: u64,
}

impl Bar {
    /// Returns true if `low <= open, close <= high` and `low <= high`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
            && self.low <= self.high
    }
}

/// An aggregated window of one or more bars, on the strategy's timeframe.
///
/// Structurally identical to [`Bar`]; `timestamp` is the window start.
pub type Candle = Bar;

const MARKET_OPEN_HOUR: u32 = 13; // 09:30 ET == 13:30 UTC (standard time approximation)
const MARKET_OPEN_MINUTE: u32 = 30;
const MARKET_CLOSE_HOUR: u32 = 20; // 16:00 ET == 20:00 UTC

fn market_open(date: DateTime<Utc>) -> DateTime<Utc> {
    date.date_naive()
        .and_hms_opt(MARKET_OPEN_HOUR, MARKET_OPEN_MINUTE, 0)
        .expect("valid time")
        .and_utc()
}

fn market_close(date: DateTime<Utc>) -> DateTime<Utc> {
    date.date_naive()
        .and_hms_opt(MARKET_CLOSE_HOUR, 0, 0)
        .expect("valid time")
        .and_utc()
}

fn in_session(ts: DateTime<Utc>) -> bool {
    ts >= market_open(ts) && ts < market_close(ts)
}

struct Window {
    open: Money,
    high: Money,
    low: Money,
    close: Money,
    volume: u64,
    window_start: DateTime<Utc>,
    bars_seen: u32,
}

impl Window {
    fn start(bar: &Bar, window_start: DateTime<Utc>) -> Self {
        Self {
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            window_start,
            bars_seen: 1,
        }
    }

    fn absorb(&mut self, bar: &Bar) {
        self.high = self.high.max(bar.high);
        self.low = self.low.min(bar.low);
        self.close = bar.close;
        self.volume += bar.volume;
        self.bars_seen += 1;
    }

    fn into_candle(self, symbol: &Symbol) -> Candle {
        Candle {
            symbol: symbol.clone(),
            timestamp: Timestamp::new(self.window_start),
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
        }
    }
}

/// Aggregates a per-symbol bar stream into fixed-width candles.
///
/// Construction rejects any interval outside `{1, 2, 5, 10}` minutes, since
/// those are the only timeframes the downstream strategy config supports.
pub struct CandleAggregator {
    symbol: Symbol,
    interval_minutes: i64,
    last_seen: Option<DateTime<Utc>>,
    buffer: Option<Window>,
}

/// Error returned when constructing an aggregator with an unsupported
/// interval.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unsupported candle interval: {0} minutes (must be 1, 2, 5, or 10)")]
pub struct InvalidIntervalError(pub i64);

impl CandleAggregator {
    /// Build an aggregator for `symbol` on `interval_minutes`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalError`] if `interval_minutes` is not one of
    /// `{1, 2, 5, 10}`.
    pub fn new(symbol: Symbol, interval_minutes: i64) -> Result<Self, InvalidIntervalError> {
        if ![1, 2, 5, 10].contains(&interval_minutes) {
            return Err(InvalidIntervalError(interval_minutes));
        }
        Ok(Self {
            symbol,
            interval_minutes,
            last_seen: None,
            buffer: None,
        })
    }

    fn window_start_for(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let open = market_open(ts);
        let elapsed_minutes = (ts - open).num_minutes().max(0);
        let window_index = elapsed_minutes / self.interval_minutes;
        open + ChronoDuration::minutes(window_index * self.interval_minutes)
    }

    /// Feed one bar in; returns a completed candle if the window closed.
    pub fn process_bar(&mut self, bar: &Bar) -> Option<Candle> {
        let ts = bar.timestamp.as_datetime();

        if let Some(last) = self.last_seen {
            if ts <= last {
                return None;
            }
        }
        if !in_session(ts) {
            return None;
        }
        self.last_seen = Some(ts);

        if self.interval_minutes == 1 {
            return Some(bar.clone());
        }

        let window_start = self.window_start_for(ts);

        match &mut self.buffer {
            None => {
                self.buffer = Some(Window::start(bar, window_start));
                None
            }
            Some(window) if window.window_start == window_start => {
                window.absorb(bar);
                if i64::from(window.bars_seen) >= self.interval_minutes {
                    self.buffer.take().map(|w| w.into_candle(&self.symbol))
                } else {
                    None
                }
            }
            Some(_) => {
                let finished = self.buffer.take().map(|w| w.into_candle(&self.symbol));
                self.buffer = Some(Window::start(bar, window_start));
                finished
            }
        }
    }

    /// Emit whatever is buffered as a partial candle (end of day, shutdown).
    pub fn flush(&mut self) -> Option<Candle> {
        self.buffer.take().map(|w| w.into_candle(&self.symbol))
    }
}

/// Percentage of `high - low` occupied by `|close - open|`. Zero range
/// yields `0`.
#[must_use]
pub fn body_pct(bar: &Bar) -> Decimal {
    let range = bar.high.amount() - bar.low.amount();
    if range.is_zero() {
        return Decimal::ZERO;
    }
    ((bar.close.amount() - bar.open.amount()).abs() / range) * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bar_at(hour: u32, minute: u32, close: f64) -> Bar {
        let ts = chrono::NaiveDate::from_ymd_opt(2026, 7, 28)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
            .and_utc();
        Bar {
            symbol: Symbol::new("AAPL"),
            timestamp: Timestamp::new(ts),
            open: Money::usd(close),
            high: Money::usd(close + 0.5),
            low: Money::usd(close - 0.5),
            close: Money::usd(close),
            volume: 100,
        }
    }

    #[test]
    fn rejects_unsupported_interval() {
        assert!(CandleAggregator::new(Symbol::new("AAPL"), 3).is_err());
        assert!(CandleAggregator::new(Symbol::new("AAPL"), 1).is_ok());
    }

    #[test]
    fn one_minute_interval_passes_bars_through() {
        let mut agg = CandleAggregator::new(Symbol::new("AAPL"), 1).unwrap();
        let bar = bar_at(13, 30, 100.0);
        let candle = agg.process_bar(&bar).unwrap();
        assert_eq!(candle.close, bar.close);
    }

    #[test]
    fn two_minute_interval_emits_after_two_bars() {
        let mut agg = CandleAggregator::new(Symbol::new("AAPL"), 2).unwrap();
        assert!(agg.process_bar(&bar_at(13, 30, 100.0)).is_none());
        let candle = agg.process_bar(&bar_at(13, 31, 101.0)).unwrap();
        assert_eq!(candle.open, Money::usd(100.0));
        assert_eq!(candle.close, Money::usd(101.0));
        assert_eq!(candle.volume, 200);
    }

    #[test]
    fn gap_to_later_window_flushes_prior_partial() {
        let mut agg = CandleAggregator::new(Symbol::new("AAPL"), 5).unwrap();
        assert!(agg.process_bar(&bar_at(13, 30, 100.0)).is_none());
        // Jump straight to the next 5-minute window without completing this one.
        let candle = agg.process_bar(&bar_at(13, 35, 102.0)).unwrap();
        assert_eq!(candle.close, Money::usd(100.0));
        assert_eq!(candle.volume, 100);
    }

    #[test]
    fn duplicate_or_earlier_timestamp_is_dropped() {
        let mut agg = CandleAggregator::new(Symbol::new("AAPL"), 1).unwrap();
        agg.process_bar(&bar_at(13, 30, 100.0));
        assert!(agg.process_bar(&bar_at(13, 30, 100.0)).is_none());
    }

    #[test]
    fn outside_session_is_dropped() {
        let mut agg = CandleAggregator::new(Symbol::new("AAPL"), 1).unwrap();
        assert!(agg.process_bar(&bar_at(3, 0, 100.0)).is_none());
    }

    #[test]
    fn flush_emits_partial_buffer() {
        let mut agg = CandleAggregator::new(Symbol::new("AAPL"), 5).unwrap();
        agg.process_bar(&bar_at(13, 30, 100.0));
        let candle = agg.flush().unwrap();
        assert_eq!(candle.close, Money::usd(100.0));
        assert!(agg.flush().is_none());
    }

    #[test]
    fn body_pct_of_flat_range_is_zero() {
        let bar = Bar {
            symbol: Symbol::new("AAPL"),
            timestamp: Timestamp::now(),
            open: Money::new(dec!(100)),
            high: Money::new(dec!(100)),
            low: Money::new(dec!(100)),
            close: Money::new(dec!(100)),
            volume: 0,
        };
        assert_eq!(body_pct(&bar), Decimal::ZERO);
    }

    #[test]
    fn bar_is_valid_checks_ordering() {
        let bar = bar_at(13, 30, 100.0);
        assert!(bar.is_valid());
        let mut bad = bar.clone();
        bad.low = Money::usd(200.0);
        assert!(!bad.is_valid());
    }
}
