//! Calendar labels for month offsets.

use chrono::{Datelike, Months, NaiveDate};
use rendafixa_domain::format::format_month_label;

/// Label for month offset `month` (1 = current month) counted from `today`.
///
/// The day of month is dropped before adding months, so a base date such
/// as January 31st never skips February.
#[must_use]
pub fn month_label(today: NaiveDate, month: u32) -> String {
    let start = today.with_day(1).unwrap_or(today);
    let date = start
        .checked_add_months(Months::new(month.saturating_sub(1)))
        .unwrap_or(start);
    format_month_label(date)
}

/// Labels for a whole month axis.
#[must_use]
pub fn axis_labels(today: NaiveDate, months: &[u32]) -> Vec<String> {
    months.iter().map(|m| month_label(today, *m)).collect()
}
