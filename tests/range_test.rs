//! Range planning coverage, grouping, and counting behavior.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use candelabra::CandelabraError;
use candelabra::interval::Interval;
use candelabra::range::{DateWindow, plan_ranges, total_candles};

fn jan_first(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

/// Flattens a plan and checks it reconstructs `[start, end]` with no gaps
/// or overlaps.
fn assert_covers(groups: &[Vec<DateWindow>], start: DateTime<Utc>, end: DateTime<Utc>) {
    let windows: Vec<&DateWindow> = groups.iter().flatten().collect();
    assert!(!windows.is_empty());
    assert_eq!(windows[0].start, start);
    assert_eq!(windows[windows.len() - 1].end, end);
    for pair in windows.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    for window in &windows {
        assert!(window.end > window.start);
    }
}

#[test]
fn total_candles_rounds_partial_buckets_up() {
    let start = jan_first(2021);

    let one_hour_span = start + TimeDelta::hours(1);
    assert_eq!(
        total_candles(start, one_hour_span, Interval::FIFTEEN_DAY).unwrap(),
        1
    );

    let ninety_minutes = start + TimeDelta::minutes(90);
    assert_eq!(
        total_candles(start, ninety_minutes, Interval::ONE_HOUR).unwrap(),
        2
    );

    let year = jan_first(2022);
    assert_eq!(total_candles(start, year, Interval::ONE_DAY).unwrap(), 365);
}

#[test]
fn total_candles_grows_with_the_span() {
    let start = jan_first(2021);
    let mut previous = 0;
    for hours in 0..48 {
        let end = start + TimeDelta::hours(hours);
        let count = total_candles(start, end, Interval::FOUR_HOUR).unwrap();
        assert!(count >= previous);
        previous = count;
    }
}

#[test]
fn total_candles_is_zero_for_inverted_spans() {
    let start = jan_first(2021);
    let earlier = start - TimeDelta::days(1);
    assert_eq!(total_candles(start, earlier, Interval::ONE_DAY).unwrap(), 0);
}

#[test]
fn total_candles_rejects_zero_interval() {
    let start = jan_first(2021);
    let end = start + TimeDelta::days(1);
    assert!(matches!(
        total_candles(start, end, Interval::new(std::time::Duration::ZERO)),
        Err(CandelabraError::ZeroInterval)
    ));
}

#[test]
fn year_of_days_packs_into_two_groups() {
    let start = jan_first(2021);
    let end = jan_first(2022);

    let groups = plan_ranges(start, end, Interval::ONE_DAY, 300).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 300);
    assert_eq!(groups[1].len(), 65);
    assert!(groups[1].len() < groups[0].len());
    assert_covers(&groups, start, end);

    for window in groups.iter().flatten() {
        assert_eq!(window.end - window.start, TimeDelta::days(1));
    }
}

#[test]
fn leap_year_gains_a_window() {
    let start = jan_first(2020);
    let end = jan_first(2021);

    let groups = plan_ranges(start, end, Interval::ONE_DAY, 300).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 300);
    assert_eq!(groups[1].len(), 66);
    assert_covers(&groups, start, end);
}

#[test]
fn uneven_span_still_covers_exactly() {
    let start = jan_first(2021);
    let end = start + TimeDelta::minutes(1000);
    let interval = Interval::new(std::time::Duration::from_secs(7 * 60));

    let groups = plan_ranges(start, end, interval, 25).unwrap();
    assert_covers(&groups, start, end);

    // ceil(1000 / 7) = 143 windows, so 5 full groups and one of 18.
    let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
    assert_eq!(sizes, [25, 25, 25, 25, 25, 18]);

    let last = groups.last().unwrap().last().unwrap();
    assert_eq!(last.end, end);
    assert!(last.span() < TimeDelta::minutes(7));
}

#[test]
fn plans_are_deterministic() {
    let start = jan_first(2021);
    let end = start + TimeDelta::days(90);

    let first = plan_ranges(start, end, Interval::SIX_HOUR, 100).unwrap();
    let second = plan_ranges(start, end, Interval::SIX_HOUR, 100).unwrap();
    assert_eq!(first, second);
}

#[test]
fn span_shorter_than_interval_yields_one_clipped_window() {
    let start = jan_first(2021);
    let end = start + TimeDelta::minutes(20);

    let groups = plan_ranges(start, end, Interval::ONE_HOUR, 500).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 1);
    assert_eq!(groups[0][0].start, start);
    assert_eq!(groups[0][0].end, end);
}
