use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

/// Date layout of the store file and of the `add` command.
pub const STORE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a `MM/DD/YYYY` date.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), STORE_DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}

/// True when `fmt` is a strftime pattern chrono can render for a plain date.
/// Time and offset specifiers (`%H`, `%z`, ...) parse fine but fail to
/// render without a time, so a sample date is rendered too.
pub fn is_valid_format(fmt: &str) -> bool {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let sample = NaiveDate::default();
    write!(String::new(), "{}", sample.format(fmt)).is_ok()
}
