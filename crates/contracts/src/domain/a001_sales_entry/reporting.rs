//! Aggregations over the sales entry collection

use super::aggregate::SalesEntry;
use chrono::{Datelike, NaiveDate};

/// Commission rate applied when the caller does not choose one.
///
/// The rate is a parameter of [`commission`] rather than a constant of the
/// calculation; 1% is only the default the UI currently uses.
pub const DEFAULT_COMMISSION_RATE_PERCENT: f64 = 1.0;

/// Sum of sale amounts over entries whose date falls in the same calendar
/// year and month as `reference`.
///
/// Amounts that fail to parse count as 0; entries whose date fails to
/// parse never match the reference month.
pub fn monthly_total(entries: &[SalesEntry], reference: NaiveDate) -> f64 {
    entries
        .iter()
        .filter_map(|entry| {
            let date = parse_entry_date(&entry.date)?;
            (date.year() == reference.year() && date.month() == reference.month())
                .then(|| entry.sale_amount.parse::<f64>().unwrap_or(0.0))
        })
        .sum()
}

/// Commission for a total at the given percentage rate
pub fn commission(total: f64, rate_percent: f64) -> f64 {
    total * rate_percent / 100.0
}

fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
