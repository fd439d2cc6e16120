//! Formatting utilities used for CLI and report outputs.

use unicode_width::UnicodeWidthStr;

/// Center `s` in a field of `width` display columns.
/// Odd padding puts the extra space on the right.
pub fn center(s: &str, width: usize) -> String {
    let len = UnicodeWidthStr::width(s);
    if len >= width {
        return s.to_string();
    }

    let pad = width - len;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// Left-justify `s` in a field of `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let len = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

/// Fractional hours with two decimals, e.g. `3.50`.
pub fn decimal_hours(total_minutes: i64) -> String {
    format!("{:.2}", total_minutes as f64 / 60.0)
}

/// `"H hr M m (X.XX hr)"` as used by the weekly grid.
pub fn mins2short(total_minutes: i64) -> String {
    format!(
        "{} hr {} m ({} hr)",
        total_minutes.div_euclid(60),
        total_minutes.rem_euclid(60),
        decimal_hours(total_minutes)
    )
}

/// `"H hours M minutes (X.XX hours)"` as used by the basic listing.
pub fn mins2long(total_minutes: i64) -> String {
    format!(
        "{} hours {} minutes ({} hours)",
        total_minutes.div_euclid(60),
        total_minutes.rem_euclid(60),
        decimal_hours(total_minutes)
    )
}
