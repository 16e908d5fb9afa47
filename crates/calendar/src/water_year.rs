//! Water year computation.

use chrono::{Datelike, NaiveDate};

use crate::days::days_between;
use crate::error::CalendarError;

/// Computes the water year a date belongs to.
///
/// A water year is defined by its `start_month`. Dates from `start_month`
/// onward belong to the *next* calendar year's water year, so a water year is
/// named after the calendar year in which it ends.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `start_month` is outside 1..=12.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hydrolag_calendar::water_year;
///
/// let oct = NaiveDate::from_ymd_opt(2000, 10, 1).unwrap();
/// let sep = NaiveDate::from_ymd_opt(2001, 9, 30).unwrap();
/// assert_eq!(water_year(oct, 10).unwrap(), 2001);
/// assert_eq!(water_year(sep, 10).unwrap(), 2001);
///
/// // Calendar year (start_month = 1):
/// assert_eq!(water_year(oct, 1).unwrap(), 2000);
/// ```
pub fn water_year(date: NaiveDate, start_month: u8) -> Result<i32, CalendarError> {
    validate_start_month(start_month)?;
    if start_month == 1 {
        return Ok(date.year());
    }
    if date.month() >= u32::from(start_month) {
        Ok(date.year() + 1)
    } else {
        Ok(date.year())
    }
}

/// Returns the first and last day (inclusive) of a water year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `start_month` is outside
/// 1..=12, or [`CalendarError::YearOutOfRange`] if the bounds cannot be
/// represented.
pub fn water_year_bounds(
    year: i32,
    start_month: u8,
) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    validate_start_month(start_month)?;
    let out_of_range = || CalendarError::YearOutOfRange { year };

    let first_calendar_year = if start_month == 1 {
        year
    } else {
        year.checked_sub(1).ok_or_else(out_of_range)?
    };
    let first = NaiveDate::from_ymd_opt(first_calendar_year, u32::from(start_month), 1)
        .ok_or_else(out_of_range)?;
    let next_first = first
        .with_year(first_calendar_year + 1)
        .ok_or_else(out_of_range)?;
    let last = next_first.pred_opt().ok_or_else(out_of_range)?;
    Ok((first, last))
}

/// Number of calendar days in a water year (365 or 366).
///
/// # Errors
///
/// Same as [`water_year_bounds`].
pub fn water_year_length(year: i32, start_month: u8) -> Result<i64, CalendarError> {
    let (first, last) = water_year_bounds(year, start_month)?;
    Ok(days_between(first, last) + 1)
}

fn validate_start_month(start_month: u8) -> Result<(), CalendarError> {
    if !(1..=12).contains(&start_month) {
        return Err(CalendarError::InvalidMonth { month: start_month });
    }
    Ok(())
}
