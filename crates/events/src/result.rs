//! Output type for event extraction.

use crate::event::EventTable;

/// Result of [`extract`](crate::extract).
///
/// Holds the event table, the threshold it was derived with, and counts of
/// the records and starts that fed it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    events: EventTable,
    threshold: f64,
    n_usable: usize,
    n_starts: usize,
    n_discarded_empty: usize,
    n_discarded_ambiguous: usize,
}

impl Extraction {
    pub(crate) fn new(
        events: EventTable,
        threshold: f64,
        n_usable: usize,
        n_starts: usize,
        n_discarded_empty: usize,
        n_discarded_ambiguous: usize,
    ) -> Self {
        Self {
            events,
            threshold,
            n_usable,
            n_starts,
            n_discarded_empty,
            n_discarded_ambiguous,
        }
    }

    /// Returns the detected events.
    pub fn events(&self) -> &EventTable {
        &self.events
    }

    /// Returns the precipitation threshold used for the run.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of records left after dropping missing values.
    pub fn n_usable(&self) -> usize {
        self.n_usable
    }

    /// Number of event starts selected before window checks.
    pub fn n_starts(&self) -> usize {
        self.n_starts
    }

    /// Starts dropped because their window held no usable record.
    pub fn n_discarded_empty(&self) -> usize {
        self.n_discarded_empty
    }

    /// Starts dropped because their window held several significant rain
    /// days while a single one was required.
    pub fn n_discarded_ambiguous(&self) -> usize {
        self.n_discarded_ambiguous
    }

    /// Splits into the event table and the threshold.
    pub fn into_parts(self) -> (EventTable, f64) {
        (self.events, self.threshold)
    }
}
