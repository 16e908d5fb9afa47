//! Whole-day arithmetic.

use chrono::{Days, NaiveDate};

/// Returns `date` advanced by `days` calendar days.
///
/// Saturates at [`NaiveDate::MAX`] instead of overflowing, so a window or
/// gap that runs past the end of the representable calendar simply covers
/// everything after `date`.
pub fn add_days_saturating(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// Signed number of whole days from `earlier` to `later`.
///
/// Negative when `later` precedes `earlier`.
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}
