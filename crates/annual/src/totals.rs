//! Water-year totals.

use std::collections::BTreeMap;

use hydrolag_calendar::{water_year, water_year_length};
use hydrolag_events::DailySeries;
use serde::Serialize;
use tracing::debug;

use crate::error::AnnualError;

/// Least-squares line through the totals, indexed by year position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    /// Change in total per water year.
    pub slope: f64,
    /// Fitted total for the first water year.
    pub intercept: f64,
}

/// Totals of one daily column per water year, in ascending year order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualSeries {
    start_month: u8,
    years: Vec<i32>,
    totals: Vec<f64>,
    day_counts: Vec<usize>,
}

impl AnnualSeries {
    /// Returns the first month of the water year.
    pub fn start_month(&self) -> u8 {
        self.start_month
    }

    /// Returns the water years.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the total for each water year.
    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// Returns how many days contributed to each total.
    pub fn day_counts(&self) -> &[usize] {
        &self.day_counts
    }

    /// Returns the number of water years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Returns `true` if no water year has data.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Fits a straight line to the totals over positions `0..n`.
    ///
    /// Returns `None` for fewer than two years.
    pub fn trend_line(&self) -> Option<TrendLine> {
        hydrolag_stats::linear_fit(&self.totals)
            .map(|(slope, intercept)| TrendLine { slope, intercept })
    }
}

/// Sums `field` per water year.
///
/// Missing values (`None`, NaN) are skipped; infinite values are summed.
/// With `complete_only`, a water year is kept only when every calendar day
/// in it has a value.
///
/// # Errors
///
/// Returns [`AnnualError::MissingField`] if the column does not exist and
/// [`AnnualError::Calendar`] if `start_month` is outside 1..=12.
#[tracing::instrument(skip_all, fields(
    field = %field,
    start_month = start_month,
    complete_only = complete_only
))]
pub fn annual_totals(
    series: &DailySeries,
    field: &str,
    start_month: u8,
    complete_only: bool,
) -> Result<AnnualSeries, AnnualError> {
    let values = series.column(field).ok_or_else(|| AnnualError::MissingField {
        name: field.to_string(),
    })?;

    let mut per_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for (&date, &value) in series.dates().iter().zip(values) {
        let wy = water_year(date, start_month)?;
        let entry = per_year.entry(wy).or_insert((0.0, 0));
        if let Some(v) = value.filter(|v| !v.is_nan()) {
            entry.0 += v;
            entry.1 += 1;
        }
    }

    let mut annual = AnnualSeries {
        start_month,
        years: Vec::with_capacity(per_year.len()),
        totals: Vec::with_capacity(per_year.len()),
        day_counts: Vec::with_capacity(per_year.len()),
    };
    for (wy, (total, n_days)) in per_year {
        if complete_only {
            let expected = water_year_length(wy, start_month)?;
            if i64::try_from(n_days).ok() != Some(expected) {
                debug!(water_year = wy, n_days, expected, "incomplete water year dropped");
                continue;
            }
        }
        annual.years.push(wy);
        annual.totals.push(total);
        annual.day_counts.push(n_days);
    }

    debug!(n_years = annual.len(), "annual totals computed");
    Ok(annual)
}
