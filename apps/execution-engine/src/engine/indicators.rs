//! Incremental indicators, computed in O(1) per candle.

use std::collections::VecDeque;

use crate::engine::candle::Candle;

/// A simple moving average maintained with a ring buffer and a running sum,
/// so each update is O(1) regardless of `period`.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    window: VecDeque<f64>,
    sum: f64,
}

impl Sma {
    /// Build an SMA over `period` samples.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
            window: VecDeque::with_capacity(period),
            sum: 0.0,
        }
    }

    /// Push a new sample, evicting the oldest if the window is full.
    pub fn update(&mut self, value: f64) {
        self.window.push_back(value);
        self.sum += value;
        if self.window.len() > self.period {
            if let Some(evicted) = self.window.pop_front() {
                self.sum -= evicted;
            }
        }
    }

    /// True once the window holds `period` samples.
    #[must_use]
    pub fn is_warm(&self) -> bool {
        self.window.len() >= self.period
    }

    /// Current average, or `None` if not yet warm.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        if self.is_warm() {
            Some(self.sum / self.period as f64)
        } else {
            None
        }
    }

    /// Number of samples currently buffered, capped at `period`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether any sample has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Snapshot of the fast/slow SMA pair at one candle, before and after the
/// update driven by that candle's close.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorSet {
    /// Fast SMA value after this candle's update.
    pub sma_fast: Option<f64>,
    /// Slow SMA value after this candle's update.
    pub sma_slow: Option<f64>,
    /// Fast SMA value observed immediately before this candle's update.
    pub prev_sma_fast: Option<f64>,
    /// Slow SMA value observed immediately before this candle's update.
    pub prev_sma_slow: Option<f64>,
    /// Slow SMA's current fill level, capped at its period.
    pub bar_count: usize,
}

impl IndicatorSet {
    /// True once both SMAs have a value.
    #[must_use]
    pub fn is_warm(&self) -> bool {
        self.sma_fast.is_some() && self.sma_slow.is_some()
    }

    /// True once the full prior-and-current set is available (needed by the
    /// strategy's convergence check).
    #[must_use]
    pub fn has_full_history(&self) -> bool {
        self.sma_fast.is_some()
            && self.sma_slow.is_some()
            && self.prev_sma_fast.is_some()
            && self.prev_sma_slow.is_some()
    }
}

/// Drives the fast/slow SMA pair from a stream of candles.
pub struct IndicatorCalculator {
    fast: Sma,
    slow: Sma,
}

impl IndicatorCalculator {
    /// Build a calculator with the given fast/slow windows.
    #[must_use]
    pub fn new(fast_period: usize, slow_period: usize) -> Self {
        Self {
            fast: Sma::new(fast_period),
            slow: Sma::new(slow_period),
        }
    }

    /// Required warm-up length: the slow SMA's period.
    #[must_use]
    pub fn required_history(&self) -> usize {
        self.slow.period
    }

    /// Capture the pre-update values, update both SMAs with `candle.close`,
    /// and return the full before/after snapshot.
    pub fn on_candle(&mut self, candle: &Candle) -> IndicatorSet {
        let prev_sma_fast = self.fast.value();
        let prev_sma_slow = self.slow.value();

        let close: f64 = candle
            .close
            .amount()
            .try_into()
            .unwrap_or(f64::from(i32::MIN));

        self.fast.update(close);
        self.slow.update(close);

        IndicatorSet {
            sma_fast: self.fast.value(),
            sma_slow: self.slow.value(),
            prev_sma_fast,
            prev_sma_slow,
            bar_count: self.slow.len(),
        }
    }
}
