use approx::assert_relative_eq;
use chrono::{Datelike, Days, NaiveDate};
use hydrolag_annual::{
    AnnualError, TrendDirection, TrendResult, TrendTest, annual_totals, summarize_trend,
};
use hydrolag_events::DailySeries;

/// Compares the last value with the first and reports a fixed p-value.
struct EndpointSign;

impl TrendTest for EndpointSign {
    fn test(&self, values: &[f64]) -> Result<TrendResult, AnnualError> {
        let first = values.first().copied().unwrap_or(0.0);
        let last = values.last().copied().unwrap_or(0.0);
        let direction = if last > first {
            TrendDirection::Increasing
        } else if last < first {
            TrendDirection::Decreasing
        } else {
            TrendDirection::NoTrend
        };
        Ok(TrendResult {
            direction,
            p_value: 0.01,
        })
    }
}

/// Three complete calendar years whose daily value grows by one per year.
fn growing_years() -> DailySeries {
    let start = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2003, 12, 31).unwrap();
    let n = (end - start).num_days() as u64 + 1;
    let dates: Vec<NaiveDate> = (0..n).map(|i| start + Days::new(i)).collect();
    let values = dates
        .iter()
        .map(|d| Some(f64::from(d.year() - 2000)))
        .collect();
    DailySeries::new(dates)
        .unwrap()
        .with_column("precipitation", values)
        .unwrap()
}

#[test]
fn calendar_year_totals_and_trend_line() {
    let annual = annual_totals(&growing_years(), "precipitation", 1, true).unwrap();
    assert_eq!(annual.years(), &[2001, 2002, 2003]);
    assert_eq!(annual.totals(), &[365.0, 730.0, 1095.0]);

    let line = annual.trend_line().unwrap();
    assert_relative_eq!(line.slope, 365.0, epsilon = 1e-9);
    assert_relative_eq!(line.intercept, 365.0, epsilon = 1e-9);
}

#[test]
fn october_water_year_drops_partial_ends() {
    // Jan 2001 - Dec 2003 covers WY 2002 and WY 2003 completely, while
    // WY 2001 and WY 2004 are partial.
    let series = growing_years();
    let partial = annual_totals(&series, "precipitation", 10, false).unwrap();
    assert_eq!(partial.years(), &[2001, 2002, 2003, 2004]);

    let complete = annual_totals(&series, "precipitation", 10, true).unwrap();
    assert_eq!(complete.years(), &[2002, 2003]);
    assert_eq!(complete.day_counts(), &[365, 365]);
}

#[test]
fn summarize_with_trait_impl() {
    let annual = annual_totals(&growing_years(), "precipitation", 1, true).unwrap();
    let result = summarize_trend("precipitation", &annual, &EndpointSign).unwrap();
    assert_eq!(result.direction, TrendDirection::Increasing);
    assert_relative_eq!(result.p_value, 0.01);
}

#[test]
fn summarize_with_closure() {
    let annual = annual_totals(&growing_years(), "precipitation", 1, true).unwrap();
    let flat = |_: &[f64]| -> Result<TrendResult, AnnualError> {
        Ok(TrendResult {
            direction: TrendDirection::NoTrend,
            p_value: 0.8,
        })
    };
    let result = summarize_trend("flat", &annual, &flat).unwrap();
    assert_eq!(result.direction, TrendDirection::NoTrend);
}

#[test]
fn summarize_passes_totals_in_year_order() {
    let annual = annual_totals(&growing_years(), "precipitation", 1, true).unwrap();
    let check = |values: &[f64]| -> Result<TrendResult, AnnualError> {
        assert_eq!(values, &[365.0, 730.0, 1095.0]);
        Ok(TrendResult {
            direction: TrendDirection::Increasing,
            p_value: 0.0,
        })
    };
    summarize_trend("order", &annual, &check).unwrap();
}

#[test]
fn summarize_rejects_bad_p_value() {
    let annual = annual_totals(&growing_years(), "precipitation", 1, true).unwrap();
    let broken = |_: &[f64]| -> Result<TrendResult, AnnualError> {
        Ok(TrendResult {
            direction: TrendDirection::Increasing,
            p_value: f64::NAN,
        })
    };
    assert!(matches!(
        summarize_trend("broken", &annual, &broken),
        Err(AnnualError::TrendTest { .. })
    ));
}

#[test]
fn summarize_propagates_test_error() {
    let annual = annual_totals(&growing_years(), "precipitation", 1, true).unwrap();
    let failing = |_: &[f64]| -> Result<TrendResult, AnnualError> {
        Err(AnnualError::TrendTest {
            reason: "too few values".to_string(),
        })
    };
    assert_eq!(
        summarize_trend("failing", &annual, &failing).unwrap_err(),
        AnnualError::TrendTest {
            reason: "too few values".to_string()
        }
    );
}

#[test]
fn summarize_empty_series() {
    let start = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
    let series = DailySeries::new(vec![start])
        .unwrap()
        .with_column("precipitation", vec![Some(1.0)])
        .unwrap();
    let annual = annual_totals(&series, "precipitation", 1, true).unwrap();
    assert!(annual.is_empty());
    assert_eq!(
        summarize_trend("empty", &annual, &EndpointSign).unwrap_err(),
        AnnualError::EmptyInput
    );
}
