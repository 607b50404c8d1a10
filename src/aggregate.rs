//! Trade validation and candle aggregation.
//!
//! [`validate_trades`] brings a raw batch into chronological order after
//! checking every record is usable; [`build_candles`] buckets the ordered
//! batch into fixed-interval OHLCV candles. Both are pure computations over
//! their inputs and safe to call concurrently from independent tasks.

use chrono::TimeDelta;
use rust_decimal::Decimal;
use tracing::debug;

use crate::Result;
use crate::error::CandelabraError;
use crate::interval::Interval;
use crate::models::candle::{Candle, Item};
use crate::models::trade::Trade;
use crate::models::{AssetClass, Pair};

/// Validates a batch of trade records and sorts it by timestamp.
///
/// A record is invalid when its timestamp is the zero epoch sentinel or
/// its price or amount is not positive. Every violation in the batch is
/// collected into a single error naming the deficient records. On success
/// the slice is reordered ascending by timestamp; records sharing a
/// timestamp keep their relative input order.
///
/// # Errors
///
/// Returns [`CandelabraError::EmptyTradeData`] for an empty batch and
/// [`CandelabraError::InvalidTrades`] when any record is malformed.
pub fn validate_trades(trades: &mut [Trade]) -> Result<()> {
    if trades.is_empty() {
        return Err(CandelabraError::EmptyTradeData);
    }

    let mut violations = Vec::new();
    for (index, trade) in trades.iter().enumerate() {
        let label = if trade.id.is_empty() {
            format!("record {index}")
        } else {
            format!("trade {}", trade.id)
        };
        if trade.timestamp.timestamp_millis() == 0 {
            violations.push(format!("{label} has no timestamp"));
        }
        if trade.price <= Decimal::ZERO {
            violations.push(format!("{label} price must be positive, got {}", trade.price));
        }
        if trade.amount <= Decimal::ZERO {
            violations.push(format!(
                "{label} amount must be positive, got {}",
                trade.amount
            ));
        }
    }
    if !violations.is_empty() {
        return Err(CandelabraError::InvalidTrades(violations.join("; ")));
    }

    trades.sort_by_key(|trade| trade.timestamp);
    Ok(())
}

/// Aggregates a trade batch into fixed-interval OHLCV candles.
///
/// Trades are validated and sorted first, then bucketed in one pass into
/// consecutive windows of `interval` length, aligned to whole multiples of
/// the interval since the Unix epoch. Each candle opens at the first trade
/// price in its window, closes at the last, tracks the high/low extremes,
/// and sums trade amounts into volume. Windows containing no trades
/// produce no candle, so sparse data yields fewer candles rather than
/// synthetic ones.
///
/// The returned [`Item`] holds candles strictly ascending by window start
/// with no duplicate timestamps.
///
/// # Errors
///
/// Returns [`CandelabraError::ZeroInterval`] for a zero-length interval,
/// or any [`validate_trades`] failure.
pub fn build_candles(
    mut trades: Vec<Trade>,
    interval: Interval,
    pair: Pair,
    asset: AssetClass,
    exchange: impl Into<String>,
) -> Result<Item> {
    let step = interval.whole_millis();
    if step == 0 {
        return Err(CandelabraError::ZeroInterval);
    }
    validate_trades(&mut trades)?;

    let first_bucket = trades[0].timestamp.timestamp_millis().div_euclid(step);
    let last_bucket = trades[trades.len() - 1]
        .timestamp
        .timestamp_millis()
        .div_euclid(step);
    let spanned = usize::try_from(last_bucket - first_bucket + 1).unwrap_or(usize::MAX);
    let mut candles: Vec<Candle> = Vec::with_capacity(spanned.min(trades.len()));

    let mut current_bucket = first_bucket;
    for trade in &trades {
        let millis = trade.timestamp.timestamp_millis();
        let bucket = millis.div_euclid(step);
        if candles.is_empty() || bucket != current_bucket {
            current_bucket = bucket;
            // Window start is the timestamp floored to the bucket boundary,
            // derived by offset so the arithmetic stays in DateTime space.
            let time = trade.timestamp - TimeDelta::milliseconds(millis - bucket * step);
            candles.push(Candle {
                time,
                open: trade.price,
                high: trade.price,
                low: trade.price,
                close: trade.price,
                volume: trade.amount,
            });
        } else if let Some(candle) = candles.last_mut() {
            if trade.price > candle.high {
                candle.high = trade.price;
            }
            if trade.price < candle.low {
                candle.low = trade.price;
            }
            candle.close = trade.price;
            candle.volume += trade.amount;
        }
    }

    debug!(
        trades = trades.len(),
        candles = candles.len(),
        %interval,
        "aggregated trades into candles"
    );

    Ok(Item {
        exchange: exchange.into(),
        pair,
        asset,
        interval,
        candles,
    })
}
