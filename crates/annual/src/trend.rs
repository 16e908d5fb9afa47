//! Trend-test collaborator seam.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::error::AnnualError;
use crate::totals::AnnualSeries;

/// Direction reported by a trend test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    NoTrend,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::NoTrend => "no trend",
        };
        f.write_str(s)
    }
}

/// Outcome of a trend test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendResult {
    /// Sign of the detected trend, or no trend.
    pub direction: TrendDirection,
    /// Significance of the test, in [0, 1].
    pub p_value: f64,
}

/// A significance test over an ordered sequence of values.
///
/// Closures of the form `Fn(&[f64]) -> Result<TrendResult, AnnualError>`
/// implement this trait.
pub trait TrendTest {
    /// Runs the test over `values`, ordered oldest first.
    fn test(&self, values: &[f64]) -> Result<TrendResult, AnnualError>;
}

impl<F> TrendTest for F
where
    F: Fn(&[f64]) -> Result<TrendResult, AnnualError>,
{
    fn test(&self, values: &[f64]) -> Result<TrendResult, AnnualError> {
        self(values)
    }
}

/// Runs `test` over the annual totals and logs the outcome under `label`.
///
/// # Errors
///
/// Returns [`AnnualError::EmptyInput`] for a series with no water years.
/// Propagates the test's own error, and returns [`AnnualError::TrendTest`]
/// if the reported p-value is not in [0, 1].
pub fn summarize_trend<T: TrendTest + ?Sized>(
    label: &str,
    series: &AnnualSeries,
    test: &T,
) -> Result<TrendResult, AnnualError> {
    if series.is_empty() {
        return Err(AnnualError::EmptyInput);
    }
    let result = test.test(series.totals())?;
    if !(0.0..=1.0).contains(&result.p_value) {
        return Err(AnnualError::TrendTest {
            reason: format!("p-value must be in [0, 1], got {}", result.p_value),
        });
    }
    info!(
        label,
        trend = %result.direction,
        p_value = result.p_value,
        n_years = series.len(),
        "trend test"
    );
    Ok(result)
}
