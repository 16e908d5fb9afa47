//! Forward search window lookup.

use std::ops::Range;

use chrono::NaiveDate;
use hydrolag_calendar::add_days_saturating;

/// Index range of the records dated within `[start, start + window_days]`.
///
/// `dates` must be sorted ascending. Both bounds are found by binary search.
/// The range is empty when no record falls inside the window, which happens
/// when the window sits entirely in a data gap.
pub fn window_bounds(dates: &[NaiveDate], start: NaiveDate, window_days: u64) -> Range<usize> {
    let end = add_days_saturating(start, window_days);
    let lo = dates.partition_point(|&d| d < start);
    let hi = dates.partition_point(|&d| d <= end);
    lo..hi
}
