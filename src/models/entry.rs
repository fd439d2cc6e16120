use chrono::NaiveDate;

/// One recorded duration of work on a specific date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub hours: u32,
    pub minutes: u32,
}

impl Entry {
    pub fn new(date: NaiveDate, hours: u32, minutes: u32) -> Self {
        Self {
            date,
            hours,
            minutes,
        }
    }

    /// Duration of the entry in minutes.
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }

    /// Grid cell text, e.g. `" 2 hr 30 m"`.
    pub fn duration_str(&self) -> String {
        format!("{:>2} hr {:>2} m", self.hours, self.minutes)
    }
}

/// Sum of the durations of `entries`, in minutes.
pub fn sum_minutes<'a, I>(entries: I) -> i64
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().map(Entry::total_minutes).sum()
}
