//! Event rows and the event table.

use chrono::NaiveDate;
use serde::Serialize;

/// A rainfall spike paired with its discharge peak.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Day the event started (precipitation at or above the threshold).
    pub event_date: NaiveDate,
    /// Day of maximum discharge within the search window.
    pub peak_date: NaiveDate,
    /// Whole days from `event_date` to `peak_date`.
    pub lag_days: i64,
    /// Discharge on `peak_date`.
    pub peak_discharge: f64,
    /// Precipitation on `event_date`.
    pub rain_amount: f64,
    /// Days in the window with precipitation at or above the threshold.
    pub n_sig_days_in_window: usize,
}

/// Events in `event_date` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventTable {
    events: Vec<Event>,
}

/// Lag statistics over an event table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LagSummary {
    /// Number of events summarised.
    pub count: usize,
    /// Mean of `lag_days`.
    pub mean_lag_days: f64,
    /// Median of `lag_days`; the two middle lags are averaged for even counts.
    pub median_lag_days: f64,
    /// Shortest lag.
    pub min_lag_days: i64,
    /// Longest lag.
    pub max_lag_days: i64,
}

impl EventTable {
    pub(crate) fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Returns the events as a slice.
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the events in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no event was detected.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the table and returns the events.
    pub fn into_vec(self) -> Vec<Event> {
        self.events
    }

    /// Summarises the lags, or `None` for an empty table.
    pub fn lag_summary(&self) -> Option<LagSummary> {
        let mut lags: Vec<f64> = self.events.iter().map(|e| e.lag_days as f64).collect();
        if lags.is_empty() {
            return None;
        }
        hydrolag_stats::sort_ascending(&mut lags);

        let min_lag_days = self.events.iter().map(|e| e.lag_days).min()?;
        let max_lag_days = self.events.iter().map(|e| e.lag_days).max()?;
        Some(LagSummary {
            count: lags.len(),
            mean_lag_days: hydrolag_stats::mean(&lags),
            median_lag_days: hydrolag_stats::median(&lags),
            min_lag_days,
            max_lag_days,
        })
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
