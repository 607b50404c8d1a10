//! Historical range planning.
//!
//! When a caller wants a span of candles longer than a source will return
//! in one request, [`plan_ranges`] partitions the span into interval-sized
//! [`DateWindow`]s and packs them into groups sized to the source's
//! per-request candle limit. [`total_candles`] computes the candle count a
//! span implies, which callers use both for pre-flight limit checks and to
//! pre-size buffers.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::error::CandelabraError;
use crate::interval::Interval;

/// One interval-sized time bucket within a planned span.
///
/// `end - start` equals the interval for every window except possibly the
/// final one of a span, which is clipped to the span's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Returns the window length.
    #[must_use]
    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Returns the number of interval-sized buckets needed to cover
/// `[start, end]`: the ceiling of the span divided by the interval, so a
/// partial trailing bucket still counts. A span of zero or negative length
/// needs no buckets.
///
/// # Errors
///
/// Returns [`CandelabraError::ZeroInterval`] for a zero-length interval.
pub fn total_candles(start: DateTime<Utc>, end: DateTime<Utc>, interval: Interval) -> Result<u64> {
    let step = interval.whole_millis();
    if step == 0 {
        return Err(CandelabraError::ZeroInterval);
    }
    let span = end.timestamp_millis() - start.timestamp_millis();
    if span <= 0 {
        return Ok(0);
    }
    Ok((span as u64).div_ceil(step as u64))
}

/// Partitions `[start, end]` into interval-sized windows grouped for
/// batched retrieval.
///
/// Concatenated in order, the windows of all groups cover the span exactly
/// with no gaps or overlaps. Every window but the last spans one interval;
/// the last is clipped to `end`. Every group but the last holds exactly
/// `limit` windows. The partition is deterministic, and an empty span
/// yields an empty plan.
///
/// # Errors
///
/// Returns [`CandelabraError::ZeroLimit`] when `limit` is zero and
/// [`CandelabraError::ZeroInterval`] for a zero-length interval.
pub fn plan_ranges(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    interval: Interval,
    limit: u32,
) -> Result<Vec<Vec<DateWindow>>> {
    if limit == 0 {
        return Err(CandelabraError::ZeroLimit);
    }
    let total = total_candles(start, end, interval)?;
    if total == 0 {
        return Ok(Vec::new());
    }

    let per_group = limit as usize;
    let step = TimeDelta::milliseconds(interval.whole_millis());
    let mut groups = Vec::with_capacity(total.div_ceil(u64::from(limit)) as usize);
    let mut group: Vec<DateWindow> = Vec::with_capacity((total as usize).min(per_group));

    let mut cursor = start;
    while cursor < end {
        let next = cursor + step;
        group.push(DateWindow {
            start: cursor,
            end: next.min(end),
        });
        if group.len() == per_group {
            groups.push(group);
            group = Vec::with_capacity(per_group);
        }
        cursor = next;
    }
    if !group.is_empty() {
        groups.push(group);
    }

    debug!(
        windows = total,
        groups = groups.len(),
        %interval,
        "planned date ranges"
    );

    Ok(groups)
}
