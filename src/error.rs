//! Crate-level error types.
//!
//! [`CandelabraError`] unifies every failure the aggregation and planning
//! paths can produce behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation. All variants are terminal: nothing in this crate retries.

use crate::interval::UnsupportedIntervalError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CandelabraError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum CandelabraError {
    /// The trade batch was empty.
    #[error("no trade data supplied")]
    EmptyTradeData,

    /// One or more trade records failed validation. The message names
    /// every deficient record.
    #[error("invalid trade records: {0}")]
    InvalidTrades(String),

    /// The requested candle interval has zero length.
    #[error("interval must be greater than zero")]
    ZeroInterval,

    /// The range planner was asked to batch windows with a zero limit.
    #[error("batch limit must be greater than zero")]
    ZeroLimit,

    /// The target exchange does not serve candles for the interval.
    #[error(transparent)]
    UnsupportedInterval(#[from] UnsupportedIntervalError),

    /// A single request over the span would return more candles than the
    /// exchange allows; the caller should plan batched ranges instead.
    #[error(
        "requested {requested} candles exceeds the exchange limit of {limit}, lower the range or batch the request"
    )]
    RangeExceedsLimit { requested: u64, limit: u32 },
}
