//! Calendar-week bucketing of entries.

use crate::models::entry::Entry;
use crate::models::week::{DAYS_PER_WEEK, WeekBucket, WeekKey, WeekStart};
use chrono::{Datelike, NaiveDate, TimeDelta};
use tracing::debug;

/// Day column of `date`; 0 is always the configured first day of the week.
pub fn weekday_index(date: NaiveDate, week_start: WeekStart) -> usize {
    let idx = match week_start {
        WeekStart::Monday => date.weekday().num_days_from_monday(),
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
    };
    idx as usize
}

/// The week containing `date`.
pub fn week_range(date: NaiveDate, week_start: WeekStart) -> WeekKey {
    let start = date - TimeDelta::days(weekday_index(date, week_start) as i64);
    WeekKey {
        start,
        end: start + TimeDelta::days(DAYS_PER_WEEK as i64 - 1),
    }
}

/// Group entries by week.
///
/// Weeks come out in the order they are first met while scanning `entries`,
/// which is chronological for a date-sorted store. Grouping is done by key
/// equality, so unsorted input never splits a week in two.
pub fn bucketize(entries: &[Entry], week_start: WeekStart) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = Vec::new();

    for entry in entries {
        let key = week_range(entry.date, week_start);
        let column = weekday_index(entry.date, week_start);

        // fast path: same week as the previous entry
        let pos = if buckets.last().is_some_and(|b| b.key == key) {
            buckets.len() - 1
        } else if let Some(p) = buckets.iter().position(|b| b.key == key) {
            p
        } else {
            buckets.push(WeekBucket::new(key));
            buckets.len() - 1
        };

        buckets[pos].push(column, *entry);
    }

    debug!(
        entries = entries.len(),
        weeks = buckets.len(),
        week_start = week_start.as_str(),
        "bucketized entries"
    );

    buckets
}
