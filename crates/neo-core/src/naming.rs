//! Output naming: reports are keyed by the calendar week of the run.

use chrono::{Datelike, Duration, NaiveDate};

/// The most recent Monday on or before `date`. A Monday anchors to itself.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(days_since_monday)
}

/// File names for the primary and error reports for the week anchored at
/// `anchor`: `NEO{MMDDYY}.xlsx` and `NEO{MMDDYY}_errors.xlsx`.
pub fn report_file_names(anchor: NaiveDate) -> (String, String) {
    let stamp = anchor.format("%m%d%y");
    (format!("NEO{stamp}.xlsx"), format!("NEO{stamp}_errors.xlsx"))
}
