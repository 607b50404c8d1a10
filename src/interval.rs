//! Candle interval taxonomy.
//!
//! [`Interval`] wraps the duration a single candle spans and carries three
//! representations: the machine [`duration`](Interval::duration), a lowercase
//! [`word`](Interval::word) for the well-known intervals exchanges advertise
//! ("onemin", "oneday", ...), and a compact [`short`](Interval::short) form
//! ("1m", "24h", "15d") used as the interval column in downstream storage.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const SECS_PER_MIN: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MIN;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Canonical word for each well-known interval, keyed by whole seconds.
///
/// Aliased durations (24h/one day, 7d/one week) resolve to a single word.
static WORDS: Lazy<HashMap<u64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (SECS_PER_MIN, "onemin"),
        (3 * SECS_PER_MIN, "threemin"),
        (5 * SECS_PER_MIN, "fivemin"),
        (10 * SECS_PER_MIN, "tenmin"),
        (15 * SECS_PER_MIN, "fifteenmin"),
        (30 * SECS_PER_MIN, "thirtymin"),
        (SECS_PER_HOUR, "onehour"),
        (2 * SECS_PER_HOUR, "twohour"),
        (4 * SECS_PER_HOUR, "fourhour"),
        (6 * SECS_PER_HOUR, "sixhour"),
        (8 * SECS_PER_HOUR, "eighthour"),
        (12 * SECS_PER_HOUR, "twelvehour"),
        (SECS_PER_DAY, "oneday"),
        (3 * SECS_PER_DAY, "threeday"),
        (7 * SECS_PER_DAY, "oneweek"),
        (14 * SECS_PER_DAY, "twoweek"),
        (15 * SECS_PER_DAY, "fifteenday"),
        (31 * SECS_PER_DAY, "onemonth"),
        (365 * SECS_PER_DAY, "oneyear"),
    ])
});

/// The duration a single candle spans.
///
/// Any positive duration is valid for aggregation and range planning;
/// only the durations listed in the associated constants resolve to a
/// [`word`](Interval::word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval(Duration);

impl Interval {
    pub const ONE_MIN: Interval = Interval::from_secs(SECS_PER_MIN);
    pub const THREE_MIN: Interval = Interval::from_secs(3 * SECS_PER_MIN);
    pub const FIVE_MIN: Interval = Interval::from_secs(5 * SECS_PER_MIN);
    pub const TEN_MIN: Interval = Interval::from_secs(10 * SECS_PER_MIN);
    pub const FIFTEEN_MIN: Interval = Interval::from_secs(15 * SECS_PER_MIN);
    pub const THIRTY_MIN: Interval = Interval::from_secs(30 * SECS_PER_MIN);
    pub const ONE_HOUR: Interval = Interval::from_secs(SECS_PER_HOUR);
    pub const TWO_HOUR: Interval = Interval::from_secs(2 * SECS_PER_HOUR);
    pub const FOUR_HOUR: Interval = Interval::from_secs(4 * SECS_PER_HOUR);
    pub const SIX_HOUR: Interval = Interval::from_secs(6 * SECS_PER_HOUR);
    pub const EIGHT_HOUR: Interval = Interval::from_secs(8 * SECS_PER_HOUR);
    pub const TWELVE_HOUR: Interval = Interval::from_secs(12 * SECS_PER_HOUR);
    pub const TWENTY_FOUR_HOUR: Interval = Interval::from_secs(SECS_PER_DAY);
    pub const ONE_DAY: Interval = Interval::TWENTY_FOUR_HOUR;
    pub const THREE_DAY: Interval = Interval::from_secs(3 * SECS_PER_DAY);
    pub const SEVEN_DAY: Interval = Interval::from_secs(7 * SECS_PER_DAY);
    pub const ONE_WEEK: Interval = Interval::SEVEN_DAY;
    pub const TWO_WEEK: Interval = Interval::from_secs(14 * SECS_PER_DAY);
    pub const FIFTEEN_DAY: Interval = Interval::from_secs(15 * SECS_PER_DAY);
    pub const ONE_MONTH: Interval = Interval::from_secs(31 * SECS_PER_DAY);
    pub const ONE_YEAR: Interval = Interval::from_secs(365 * SECS_PER_DAY);

    /// Creates an interval from an arbitrary duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Interval(duration)
    }

    const fn from_secs(secs: u64) -> Self {
        Interval(Duration::from_secs(secs))
    }

    /// Returns the underlying duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.0
    }

    /// Returns the canonical lowercase word for this interval, or
    /// `"notfound"` when the duration is not in the well-known table.
    #[must_use]
    pub fn word(&self) -> &'static str {
        duration_to_word(self.0)
    }

    /// Returns the compact short form of this interval, derived from the
    /// duration alone: whole multiples of a day from two days up render in
    /// days ("15d"), then whole hours ("24h"), minutes ("30m"), and
    /// seconds ("45s").
    #[must_use]
    pub fn short(&self) -> String {
        let secs = self.0.as_secs();
        if self.0.subsec_nanos() == 0 {
            if secs >= 2 * SECS_PER_DAY && secs % SECS_PER_DAY == 0 {
                return format!("{}d", secs / SECS_PER_DAY);
            }
            if secs > 0 && secs % SECS_PER_HOUR == 0 {
                return format!("{}h", secs / SECS_PER_HOUR);
            }
            if secs > 0 && secs % SECS_PER_MIN == 0 {
                return format!("{}m", secs / SECS_PER_MIN);
            }
        }
        format!("{}s", secs)
    }

    /// Returns the interval length in whole minutes, the granularity unit
    /// most exchange candle endpoints take as a request parameter.
    #[must_use]
    pub const fn whole_minutes(&self) -> u64 {
        self.0.as_secs() / SECS_PER_MIN
    }

    /// Interval length in milliseconds, clamped to `i64` for timestamp
    /// arithmetic.
    pub(crate) fn whole_millis(&self) -> i64 {
        self.0.as_millis().min(i64::MAX as u128) as i64
    }
}

impl fmt::Display for Interval {
    /// Renders the duration in full `XhYmZs` notation, e.g. `8760h0m0s`
    /// for a one-year interval. Sub-second components are not rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs();
        let hours = total / SECS_PER_HOUR;
        let minutes = (total % SECS_PER_HOUR) / SECS_PER_MIN;
        let seconds = total % SECS_PER_MIN;
        if hours > 0 {
            write!(f, "{hours}h{minutes}m{seconds}s")
        } else if minutes > 0 {
            write!(f, "{minutes}m{seconds}s")
        } else {
            write!(f, "{seconds}s")
        }
    }
}

/// Looks up the canonical word for a duration before an [`Interval`] has
/// been constructed. Durations outside the well-known table, including any
/// with a fractional second, map to `"notfound"`.
#[must_use]
pub fn duration_to_word(duration: Duration) -> &'static str {
    if duration.subsec_nanos() != 0 {
        return "notfound";
    }
    WORDS.get(&duration.as_secs()).copied().unwrap_or("notfound")
}

/// An interval the target exchange does not serve candles for.
///
/// [`Display`](fmt::Display) renders the short word-based message;
/// [`detailed`](UnsupportedIntervalError::detailed) renders the same
/// message with the full duration notation instead of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedIntervalError {
    pub interval: Interval,
}

impl UnsupportedIntervalError {
    /// The long-form message, spelling out the raw duration, e.g.
    /// `8760h0m0s interval unsupported by exchange`.
    #[must_use]
    pub fn detailed(&self) -> String {
        unsupported_message(&self.interval.to_string())
    }
}

impl fmt::Display for UnsupportedIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&unsupported_message(self.interval.word()))
    }
}

impl std::error::Error for UnsupportedIntervalError {}

fn unsupported_message(interval: &str) -> String {
    format!("{interval} interval unsupported by exchange")
}
