//! Raw trade records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single executed trade as reported by an exchange client.
///
/// Only the fields the aggregator needs are carried; order side and type
/// stay with the exchange client that observed the trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub timestamp: DateTime<Utc>,
    /// Exchange-assigned trade identifier, unique within a batch.
    pub id: String,
    pub price: Decimal,
    pub amount: Decimal,
}

impl Trade {
    /// Creates a trade record.
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        id: impl Into<String>,
        price: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            timestamp,
            id: id.into(),
            price,
            amount,
        }
    }
}
