//! Report Composer: weekly grid and basic listing.

use crate::config::Config;
use crate::core::calculator::week::bucketize;
use crate::errors::AppResult;
use crate::export::export_html;
use crate::models::entry::{Entry, sum_minutes};
use crate::models::week::WeekStart;
use crate::store::EntryStore;
use crate::utils::date::format_date;
use crate::utils::formatting::{mins2long, mins2short, pad_right};
use crate::utils::table::WeekTable;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Calendar and date-format settings a report is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub week_start: WeekStart,
    pub full_date_format: String,
    pub short_date_format: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ReportOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            week_start: cfg.week_start,
            full_date_format: cfg.full_date_format.clone(),
            short_date_format: cfg.short_date_format.clone(),
        }
    }
}

/// One table per week, then the grand total line.
pub fn compose_weekly(entries: &[Entry], opts: &ReportOptions) -> String {
    let mut out: String = bucketize(entries, opts.week_start)
        .iter()
        .map(|bucket| {
            WeekTable::new(bucket, &opts.full_date_format, &opts.short_date_format).render()
        })
        .collect();

    out.push_str(&format!("Total: {}\n", mins2short(sum_minutes(entries))));
    out
}

/// Flat numbered list; a blank line separates different dates.
pub fn compose_basic(entries: &[Entry], opts: &ReportOptions) -> String {
    let mut out = String::new();
    let mut prev_date: Option<String> = None;

    // groups follow the displayed date, so a coarse format merges days
    for (i, entry) in entries.iter().enumerate() {
        let shown = format_date(entry.date, &opts.full_date_format);
        if prev_date.as_ref().is_some_and(|d| *d != shown) {
            out.push('\n');
        }

        out.push_str(&format!(
            "{} {:<2} hours {:>2} minutes on {}\n",
            pad_right(&format!("{}.", i + 1), 4),
            entry.hours,
            entry.minutes,
            shown
        ));
        prev_date = Some(shown);
    }

    out.push_str(&format!("\nTotal: {}\n", mins2long(sum_minutes(entries))));
    out
}

pub struct ReportLogic;

impl ReportLogic {
    /// Compose the report and send it to stdout, or to `output` as HTML.
    pub fn list(
        store: &EntryStore,
        cfg: &Config,
        basic: bool,
        output: Option<&Path>,
    ) -> AppResult<()> {
        let opts = ReportOptions::from(cfg);
        let text = if basic {
            compose_basic(store.entries(), &opts)
        } else {
            compose_weekly(store.entries(), &opts)
        };

        debug!(basic, entries = store.len(), bytes = text.len(), "report composed");

        match output {
            Some(path) => export_html(path, &cfg.html_title, &text),
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}
