//! Market-data candle core.
//!
//! Converts raw timestamped trade records from exchange clients into
//! fixed-interval OHLCV candles, and plans long historical candle
//! retrievals as bounded batches of date windows when a source caps how
//! many candles one request may return.
//!
//! Everything here is stateless pure computation over caller-owned values:
//! no network, no storage, no retries. Exchange clients feed trades in and
//! consume the plans; persistence, backtesting, and presentation layers
//! consume the produced [`models::candle::Item`] read-only.

pub mod aggregate;
pub mod error;
pub mod interval;
pub mod models;
pub mod range;

pub use error::{CandelabraError, Result};
