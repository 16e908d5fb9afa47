//! Invariants that hold for any series and configuration.

use chrono::NaiveDate;
use hydrolag_calendar::{add_days_saturating, days_between};
use hydrolag_events::{
    DailySeries, EventConfig, EventError, Extraction, extract, precip_threshold,
    select_event_starts,
};
use proptest::prelude::*;

/// One generated day: gap since the previous record, precipitation, discharge.
type RawDay = (u64, Option<f64>, Option<f64>);

fn arb_precip() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        5 => Just(Some(0.0)),
        4 => (0.01f64..60.0).prop_map(Some),
        1 => Just(None),
    ]
}

fn arb_discharge() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        9 => (0.0f64..500.0).prop_map(Some),
        1 => Just(None),
    ]
}

fn arb_days() -> impl Strategy<Value = Vec<RawDay>> {
    prop::collection::vec((1u64..4, arb_precip(), arb_discharge()), 1..150)
}

fn arb_config() -> impl Strategy<Value = EventConfig> {
    (0.05f64..0.95, 0i64..15, 0i64..15, any::<bool>()).prop_map(|(q, gap, window, single)| {
        EventConfig::new()
            .with_quantile(q)
            .with_min_gap_days(gap)
            .with_window_days(window)
            .with_require_single_day(single)
    })
}

fn build_series(days: &[RawDay]) -> DailySeries {
    let mut date = NaiveDate::from_ymd_opt(1999, 10, 1).unwrap();
    let mut dates = Vec::with_capacity(days.len());
    for &(step, _, _) in days {
        date = add_days_saturating(date, step);
        dates.push(date);
    }
    DailySeries::new(dates)
        .unwrap()
        .with_column("precipitation", days.iter().map(|d| d.1).collect())
        .unwrap()
        .with_column("discharge", days.iter().map(|d| d.2).collect())
        .unwrap()
}

/// Runs extraction, returning `None` for the two data-driven failures.
fn run(series: &DailySeries, config: &EventConfig) -> Option<Extraction> {
    match extract(series, config) {
        Ok(result) => Some(result),
        Err(EventError::EmptyInput | EventError::NoPositivePrecipitation { .. }) => None,
        Err(other) => panic!("unexpected error: {other}"),
    }
}

proptest! {
    #[test]
    fn event_dates_reach_threshold(days in arb_days(), config in arb_config()) {
        let series = build_series(&days);
        if let Some(result) = run(&series, &config) {
            for e in result.events() {
                prop_assert!(e.rain_amount >= result.threshold());
            }
        }
    }

    #[test]
    fn starts_are_separated_by_more_than_gap(days in arb_days(), config in arb_config()) {
        let series = build_series(&days);
        if let Some(result) = run(&series, &config) {
            let usable = series.usable("precipitation", "discharge").unwrap();
            let gap = config.min_gap_days();
            let starts = select_event_starts(
                usable.dates(),
                usable.precip(),
                result.threshold(),
                gap as u64,
            );
            prop_assert_eq!(starts.len(), result.n_starts());
            for pair in starts.windows(2) {
                prop_assert!(days_between(pair[0], pair[1]) > gap);
            }
            let events: Vec<_> = result.events().iter().collect();
            for pair in events.windows(2) {
                prop_assert!(days_between(pair[0].event_date, pair[1].event_date) > gap);
            }
        }
    }

    #[test]
    fn peaks_stay_inside_window(days in arb_days(), config in arb_config()) {
        let series = build_series(&days);
        if let Some(result) = run(&series, &config) {
            for e in result.events() {
                prop_assert!(e.lag_days >= 0);
                prop_assert!(e.lag_days <= config.window_days());
                prop_assert_eq!(days_between(e.event_date, e.peak_date), e.lag_days);
                prop_assert!(e.n_sig_days_in_window >= 1);
            }
        }
    }

    #[test]
    fn single_day_requirement_holds(days in arb_days(), config in arb_config()) {
        let config = config.with_require_single_day(true);
        let series = build_series(&days);
        if let Some(result) = run(&series, &config) {
            for e in result.events() {
                prop_assert_eq!(e.n_sig_days_in_window, 1);
            }
        }
    }

    #[test]
    fn start_accounting_balances(days in arb_days(), config in arb_config()) {
        let series = build_series(&days);
        if let Some(result) = run(&series, &config) {
            prop_assert_eq!(result.n_discarded_empty(), 0);
            prop_assert_eq!(
                result.n_starts(),
                result.events().len() + result.n_discarded_ambiguous()
            );
        }
    }

    #[test]
    fn extraction_is_idempotent(days in arb_days(), config in arb_config()) {
        let series = build_series(&days);
        let first = extract(&series, &config);
        let second = extract(&series, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn threshold_is_monotone_in_q(
        precip in prop::collection::vec(0.0f64..80.0, 1..200),
        a in 0.01f64..0.99,
        b in 0.01f64..0.99,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let t_lo = precip_threshold(&precip, lo);
        let t_hi = precip_threshold(&precip, hi);
        prop_assert_eq!(t_lo.is_some(), t_hi.is_some());
        if let (Some(t_lo), Some(t_hi)) = (t_lo, t_hi) {
            // Interpolation may round one ulp past the next order statistic.
            prop_assert!(t_lo <= t_hi + 1e-9 * t_hi.abs().max(1.0));
        }
    }
}
