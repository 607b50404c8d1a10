//! Shared market-data models.
//!
//! Contains the currency pair and asset class identifiers attached to every
//! candle run, and the capability descriptor exchange clients publish so
//! callers can plan candle requests.

pub mod candle;
pub mod trade;

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::CandelabraError;
use crate::interval::{Interval, UnsupportedIntervalError};
use crate::range;

/// A base/quote currency pair, e.g. BTC/USD.
///
/// Codes are stored uppercase so downstream storage keys compare
/// consistently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub base: String,
    pub quote: String,
}

impl Pair {
    /// Creates a pair from base and quote currency codes.
    #[must_use]
    pub fn new(base: impl AsRef<str>, quote: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().to_uppercase(),
            quote: quote.as_ref().to_uppercase(),
        }
    }

    /// Parses a `BASE/QUOTE` symbol. Returns `None` when either side of
    /// the delimiter is missing.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let (base, quote) = symbol.split_once('/')?;
        if base.is_empty() || quote.is_empty() {
            return None;
        }
        Some(Self::new(base, quote))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// Asset class a candle run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Spot,
    Margin,
    Futures,
}

impl AssetClass {
    /// Returns the lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Spot => "spot",
            AssetClass::Margin => "margin",
            AssetClass::Futures => "futures",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candle-related capabilities published by an exchange client.
///
/// Read-only input to request planning: which named intervals the source
/// serves, whether it accepts arbitrary date ranges, and how many candles
/// a single request may return.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeCapabilities {
    pub supports_intervals: bool,
    /// Supported intervals keyed by interval word ("onemin", "oneday", ...).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub intervals: HashMap<String, bool>,
    pub supports_date_range: bool,
    /// Maximum candles returned per request.
    pub limit: u32,
}

impl ExchangeCapabilities {
    /// Checks that the exchange serves candles for `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedIntervalError`] when interval selection is not
    /// supported at all or the interval's word is not in the supported map.
    pub fn validate_interval(
        &self,
        interval: Interval,
    ) -> std::result::Result<(), UnsupportedIntervalError> {
        let supported = self.supports_intervals
            && self.intervals.get(interval.word()).copied().unwrap_or(false);
        if supported {
            Ok(())
        } else {
            Err(UnsupportedIntervalError { interval })
        }
    }

    /// Checks that one request can cover `[start, end]` at `interval`
    /// without exceeding the per-request candle limit.
    ///
    /// # Errors
    ///
    /// Returns [`CandelabraError::RangeExceedsLimit`] when the span implies
    /// more candles than `limit`, and [`CandelabraError::ZeroInterval`] for
    /// a zero-length interval.
    pub fn ensure_within_limit(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: Interval,
    ) -> Result<()> {
        let requested = range::total_candles(start, end, interval)?;
        if requested > u64::from(self.limit) {
            return Err(CandelabraError::RangeExceedsLimit {
                requested,
                limit: self.limit,
            });
        }
        Ok(())
    }
}
