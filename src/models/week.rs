use crate::models::entry::Entry;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;

/// Which weekday opens a calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Sunday => "sunday",
            WeekStart::Monday => "monday",
        }
    }
}

/// Inclusive `(start, end)` dates of one calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekKey {
    /// First instant of the week (00:00:00.000 on `start`).
    pub fn start_instant(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Last instant of the week (23:59:59.999 on `end`).
    pub fn end_instant(&self) -> NaiveDateTime {
        self.end.and_time(NaiveTime::MIN) + TimeDelta::days(1) - TimeDelta::milliseconds(1)
    }

    /// Date shown above the given day column.
    pub fn day(&self, column: usize) -> NaiveDate {
        self.start + TimeDelta::days(column as i64)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Entries of one week, laid out per day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub key: WeekKey,
    pub days: [Vec<Entry>; DAYS_PER_WEEK],
    pub total_minutes: i64,
}

impl WeekBucket {
    pub fn new(key: WeekKey) -> Self {
        Self {
            key,
            days: Default::default(),
            total_minutes: 0,
        }
    }

    pub fn push(&mut self, column: usize, entry: Entry) {
        self.total_minutes += entry.total_minutes();
        self.days[column].push(entry);
    }

    /// Number of grid rows needed: the fullest day column decides.
    pub fn row_count(&self) -> usize {
        self.days.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn entry_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// All entries of the week, column by column.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.days.iter().flatten()
    }
}
