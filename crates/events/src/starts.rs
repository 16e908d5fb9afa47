//! Independent event-start selection.

use chrono::NaiveDate;
use hydrolag_calendar::add_days_saturating;

/// Selects event starts with a greedy left-to-right scan.
///
/// A day starts an event when its precipitation reaches `threshold` and it
/// falls after the current skip-until cursor. Each start moves the cursor to
/// `start + min_gap_days`, so consecutive starts are more than
/// `min_gap_days` apart. Days inside the gap are never reconsidered, even
/// when they carry more rain than the start that opened the gap.
///
/// `dates` must be strictly increasing and `precip` must have the same
/// length; extra values on either side are ignored.
pub fn select_event_starts(
    dates: &[NaiveDate],
    precip: &[f64],
    threshold: f64,
    min_gap_days: u64,
) -> Vec<NaiveDate> {
    let mut starts = Vec::new();
    let mut skip_until: Option<NaiveDate> = None;

    for (&date, &rain) in dates.iter().zip(precip) {
        if skip_until.is_some_and(|cursor| date <= cursor) {
            continue;
        }
        if rain >= threshold {
            starts.push(date);
            skip_until = Some(add_days_saturating(date, min_gap_days));
        }
    }

    starts
}
