//! Event extraction pipeline.

use hydrolag_calendar::days_between;
use hydrolag_stats::argmax_first;
use tracing::{debug, info};

use crate::config::EventConfig;
use crate::error::EventError;
use crate::event::{Event, EventTable};
use crate::result::Extraction;
use crate::series::DailySeries;
use crate::starts::select_event_starts;
use crate::threshold::precip_threshold;
use crate::window::window_bounds;

/// Detects rainfall events and the lag to their discharge peaks.
///
/// The configuration is validated before any data is read. Records missing
/// either field are dropped once, up front, and every later step works on
/// the remaining records. The threshold is the `q` quantile of the positive
/// precipitation values. Event starts are chosen greedily with
/// `min_gap_days` of separation. Each start is paired with the first maximum
/// of discharge in `[start, start + window_days]`.
///
/// # Errors
///
/// - [`EventError::InvalidParameter`] if the configuration is invalid.
/// - [`EventError::MissingField`] if either named column is absent.
/// - [`EventError::EmptyInput`] if no record survives the missing-value drop.
/// - [`EventError::NoPositivePrecipitation`] if no usable record has
///   positive precipitation.
#[tracing::instrument(skip_all, fields(
    q = config.quantile(),
    min_gap_days = config.min_gap_days(),
    window_days = config.window_days()
))]
pub fn extract(series: &DailySeries, config: &EventConfig) -> Result<Extraction, EventError> {
    config.validate()?;

    let usable = series.usable(config.precip_field(), config.discharge_field())?;
    if usable.is_empty() {
        return Err(EventError::EmptyInput);
    }
    let threshold = precip_threshold(usable.precip(), config.quantile()).ok_or(
        EventError::NoPositivePrecipitation {
            n_records: usable.len(),
        },
    )?;
    debug!(
        n_records = series.len(),
        n_usable = usable.len(),
        threshold,
        "threshold resolved"
    );

    // Both counts were checked non-negative by validate().
    let min_gap_days = config.min_gap_days().unsigned_abs();
    let window_days = config.window_days().unsigned_abs();

    let starts = select_event_starts(usable.dates(), usable.precip(), threshold, min_gap_days);

    let mut events = Vec::with_capacity(starts.len());
    let mut n_discarded_empty = 0;
    let mut n_discarded_ambiguous = 0;

    for &start in &starts {
        let range = window_bounds(usable.dates(), start, window_days);
        if range.is_empty() {
            debug!(%start, "empty window: start discarded");
            n_discarded_empty += 1;
            continue;
        }

        let dates = &usable.dates()[range.clone()];
        let precip = &usable.precip()[range.clone()];
        let discharge = &usable.discharge()[range];

        let n_sig = precip.iter().filter(|&&p| p >= threshold).count();
        if config.require_single_day() && n_sig > 1 {
            debug!(%start, n_sig, "several significant rain days: start discarded");
            n_discarded_ambiguous += 1;
            continue;
        }

        // NaN was dropped with the missing values, so a non-empty window has a peak.
        let Some(peak) = argmax_first(discharge) else {
            debug!(%start, "no comparable discharge: start discarded");
            n_discarded_empty += 1;
            continue;
        };
        let peak_date = dates[peak];

        // Every start is itself a usable record, so it opens its own window.
        events.push(Event {
            event_date: start,
            peak_date,
            lag_days: days_between(start, peak_date),
            peak_discharge: discharge[peak],
            rain_amount: precip[0],
            n_sig_days_in_window: n_sig,
        });
    }

    info!(
        n_starts = starts.len(),
        n_events = events.len(),
        n_discarded_empty,
        n_discarded_ambiguous,
        threshold,
        "event extraction complete"
    );

    Ok(Extraction::new(
        EventTable::new(events),
        threshold,
        usable.len(),
        starts.len(),
        n_discarded_empty,
        n_discarded_ambiguous,
    ))
}
