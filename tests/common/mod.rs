//! Shared test utilities.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use candelabra::models::Pair;
use candelabra::models::trade::Trade;

/// Fixed batch origin, aligned to a minute boundary.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap()
}

/// Builds a trade record with the given minute offset from [`base_time`].
pub fn trade_at(minutes: i64, id: &str, price: Decimal, amount: Decimal) -> Trade {
    Trade::new(
        base_time() + chrono::TimeDelta::minutes(minutes),
        id,
        price,
        amount,
    )
}

pub fn btc_usd() -> Pair {
    Pair::new("BTC", "USD")
}
