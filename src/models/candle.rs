//! OHLCV candle models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::models::{AssetClass, Pair};

/// A single OHLCV bar covering one interval-sized window.
///
/// `time` is the start of the window. Invariants upheld by the aggregator:
/// `high >= max(open, close)`, `low <= min(open, close)`, `volume >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// A run of candles for one exchange, pair, asset class, and interval.
///
/// Candles are strictly ascending by `time` with no duplicate timestamps.
/// Storage collaborators key each candle on
/// (time, exchange, base, quote, interval word).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub exchange: String,
    pub pair: Pair,
    pub asset: AssetClass,
    pub interval: Interval,
    pub candles: Vec<Candle>,
}

impl Item {
    /// Returns the number of candles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Returns `true` when no candles are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}
