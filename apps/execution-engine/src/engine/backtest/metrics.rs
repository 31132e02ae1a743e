//! Performance metrics computed from a finished backtest run.
//!
//! Sharpe uses the sample (ddof = 1) standard deviation of daily returns,
//! the same convention the teacher's own performance summary uses, scaled
//! by sqrt(252) trading days.

use rust_decimal::Decimal;

use crate::domain::shared::{Money, Timestamp};
use crate::engine::order_record::TradeRecord;

const PROFIT_FACTOR_CAP: f64 = 9999.99;
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Summary statistics for one completed backtest run.
#[derive(Debug, Clone, Default)]
pub struct BacktestMetrics {
    /// Total return over the run, as a fraction of initial equity.
    pub total_return: Decimal,
    /// Fraction of trades that closed with positive pnl.
    pub win_rate: Decimal,
    /// Gross profit / gross loss, capped at 9999.99. `None` with no losing
    /// trades to divide by and no winners either.
    pub profit_factor: Option<f64>,
    /// Annualized Sharpe ratio from daily equity returns. `None` with fewer
    /// than two daily observations.
    pub sharpe_ratio: Option<f64>,
    /// Largest peak-to-trough drawdown observed across the equity curve.
    pub max_drawdown: Decimal,
    /// Average winning trade pnl.
    pub avg_win: Money,
    /// Average losing trade pnl.
    pub avg_loss: Money,
    /// Largest single winning trade pnl.
    pub largest_win: Money,
    /// Largest single losing trade pnl.
    pub largest_loss: Money,
    /// Mean holding duration across all closed trades.
    pub avg_trade_duration_seconds: i64,
    /// Number of trades closed.
    pub total_trades: usize,
    /// Number of trades closed with positive pnl.
    pub winning_trades: usize,
    /// Number of trades closed with non-positive pnl.
    pub losing_trades: usize,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Daily equity closes: the last observation of each calendar day in the
/// (timestamp, equity) candle-level equity curve.
fn daily_closes(equity_curve: &[(Timestamp, Decimal)]) -> Vec<Decimal> {
    let mut closes: Vec<(chrono::NaiveDate, Decimal)> = Vec::new();
    for (timestamp, equity) in equity_curve {
        let date = timestamp.as_datetime().date_naive();
        match closes.last_mut() {
            Some((last_date, last_equity)) if *last_date == date => *last_equity = *equity,
            _ => closes.push((date, *equity)),
        }
    }
    closes.into_iter().map(|(_, equity)| equity).collect()
}

fn daily_returns(closes: &[Decimal]) -> Vec<f64> {
    closes
        .windows(2)
        .filter_map(|pair| {
            let (prev, curr) = (pair[0], pair[1]);
            if prev.is_zero() {
                None
            } else {
                let ratio = (curr - prev) / prev;
                ratio.try_into().ok()
            }
        })
        .collect()
}

/// Compute run metrics from its closed trades and candle-level equity
/// curve.
#[must_use]
pub fn compute_metrics(
    trades: &[TradeRecord],
    equity_curve: &[(Timestamp, Decimal)],
    initial_equity: Decimal,
) -> BacktestMetrics {
    let final_equity = equity_curve.last().map_or(initial_equity, |(_, e)| *e);
    let total_return = if initial_equity.is_zero() {
        Decimal::ZERO
    } else {
        (final_equity - initial_equity) / initial_equity
    };

    let total_trades = trades.len();
    let winners: Vec<&TradeRecord> = trades.iter().filter(|t| t.pnl.is_positive()).collect();
    let losers: Vec<&TradeRecord> = trades.iter().filter(|t| !t.pnl.is_positive()).collect();
    let winning_trades = winners.len();
    let losing_trades = losers.len();

    let win_rate = if total_trades == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(winning_trades as u64) / Decimal::from(total_trades as u64)
    };

    let gross_profit: Decimal = winners.iter().map(|t| t.pnl.amount()).sum();
    let gross_loss: Decimal = losers.iter().map(|t| t.pnl.amount().abs()).sum();
    let profit_factor = if gross_loss.is_zero() {
        if gross_profit.is_zero() {
            None
        } else {
            Some(PROFIT_FACTOR_CAP)
        }
    } else {
        let ratio = gross_profit / gross_loss;
        let as_f64: f64 = ratio.try_into().unwrap_or(PROFIT_FACTOR_CAP);
        Some(as_f64.min(PROFIT_FACTOR_CAP))
    };

    let avg_win = if winning_trades == 0 {
        Money::ZERO
    } else {
        Money::new(gross_profit / Decimal::from(winning_trades as u64))
    };
    let avg_loss = if losing_trades == 0 {
        Money::ZERO
    } else {
        Money::new(-(gross_loss / Decimal::from(losing_trades as u64)))
    };
    let largest_win = winners
        .iter()
        .map(|t| t.pnl)
        .fold(Money::ZERO, |acc, pnl| if pnl > acc { pnl } else { acc });
    let largest_loss = losers
        .iter()
        .map(|t| t.pnl)
        .fold(Money::ZERO, |acc, pnl| if pnl < acc { pnl } else { acc });

    let avg_trade_duration_seconds = if total_trades == 0 {
        0
    } else {
        trades.iter().map(|t| t.duration_seconds).sum::<i64>() / total_trades as i64
    };

    let closes = daily_closes(equity_curve);
    let returns = daily_returns(&closes);
    let sharpe_ratio = match (mean(&returns), sample_std_dev(&returns)) {
        (Some(avg), Some(std)) if std > 0.0 => Some(avg / std * TRADING_DAYS_PER_YEAR.sqrt()),
        _ => None,
    };

    let mut peak = equity_curve.first().map_or(initial_equity, |(_, e)| *e);
    let mut max_drawdown = Decimal::ZERO;
    for (_, equity) in equity_curve {
        if *equity > peak {
            peak = *equity;
        }
        if !peak.is_zero() {
            let drawdown = (peak - *equity) / peak;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }

    BacktestMetrics {
        total_return,
        win_rate,
        profit_factor,
        sharpe_ratio,
        max_drawdown,
        avg_win,
        avg_loss,
        largest_win,
        largest_loss,
        avg_trade_duration_seconds,
        total_trades,
        winning_trades,
        losing_trades,
    }
}
