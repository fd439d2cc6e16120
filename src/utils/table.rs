//! Box-drawn weekly grid used by the `list` report.
//!
//! One table per week: a header with the date range and the week's total,
//! a row of day labels, then one row per entry slot.

use crate::models::week::{DAYS_PER_WEEK, WeekBucket};
use crate::utils::date::format_date;
use crate::utils::formatting::{center, mins2short};

/// Inner width of one day column.
pub const COLUMN_WIDTH: usize = 12;

/// Width the "no entry" placeholder is centered in. Narrower than the column;
/// the row separators add one space on each side.
pub const PLACEHOLDER_WIDTH: usize = 10;

/// Inner width of the whole table: 7 columns plus 6 separators.
pub const INNER_WIDTH: usize = DAYS_PER_WEEK * (COLUMN_WIDTH + 1) - 1;

pub struct WeekTable<'a> {
    pub bucket: &'a WeekBucket,
    pub full_date_format: &'a str,
    pub short_date_format: &'a str,
}

impl<'a> WeekTable<'a> {
    pub fn new(bucket: &'a WeekBucket, full_date_format: &'a str, short_date_format: &'a str) -> Self {
        Self {
            bucket,
            full_date_format,
            short_date_format,
        }
    }

    pub fn render(&self) -> String {
        let key = &self.bucket.key;
        let mut out = String::new();

        out.push_str(&format!("┌{}┐\n", "─".repeat(INNER_WIDTH)));

        let range = format!(
            "{} - {}",
            format_date(key.start, self.full_date_format),
            format_date(key.end, self.full_date_format)
        );
        out.push_str(&format!("│{}│\n", center(&range, INNER_WIDTH)));

        let week_total = format!("Week's Total: {}", mins2short(self.bucket.total_minutes));
        out.push_str(&format!("│{}│\n", center(&week_total, INNER_WIDTH)));

        out.push_str(&rule('├', '┬', '┤'));

        let headers: Vec<String> = (0..DAYS_PER_WEEK)
            .map(|c| center(&format_date(key.day(c), self.short_date_format), COLUMN_WIDTH))
            .collect();
        out.push_str(&format!("│{}│\n", headers.join("│")));

        out.push_str(&rule('├', '┼', '┤'));

        for row in 0..self.bucket.row_count() {
            let cells: Vec<String> = self
                .bucket
                .days
                .iter()
                .map(|day| match day.get(row) {
                    Some(entry) => entry.duration_str(),
                    None => center("-", PLACEHOLDER_WIDTH),
                })
                .collect();
            out.push_str(&format!("│ {} │\n", cells.join(" │ ")));
        }

        out.push_str(&rule('└', '┴', '┘'));
        out
    }
}

/// Horizontal rule across the seven day columns.
fn rule(left: char, junction: char, right: char) -> String {
    let segments = vec!["─".repeat(COLUMN_WIDTH); DAYS_PER_WEEK];
    format!("{left}{}{right}\n", segments.join(&junction.to_string()))
}
