//! Error types for the hydrolag-events crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the hydrolag-events crate.
///
/// An extraction that finds no events is not an error: it returns an empty
/// [`EventTable`](crate::EventTable) together with a valid threshold.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventError {
    /// Returned when no record has both precipitation and discharge present.
    #[error("no usable records: every row is missing precipitation or discharge")]
    EmptyInput,

    /// Returned when a configuration value is out of range.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a named column is not present in the series.
    #[error("field '{name}' not found in series")]
    MissingField {
        /// Name of the missing column.
        name: String,
    },

    /// Returned when usable records exist but none has positive
    /// precipitation, leaving the threshold quantile undefined.
    #[error("no positive precipitation among {n_records} usable records")]
    NoPositivePrecipitation {
        /// Number of usable records inspected.
        n_records: usize,
    },

    /// Returned when a column length differs from the number of dates.
    #[error("column '{column}' has {got} values, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Number of dates in the series.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when dates are not strictly increasing.
    #[error("dates must be strictly increasing: {previous} then {current} at index {index}")]
    UnorderedDates {
        /// Index of the first offending date.
        index: usize,
        /// The date preceding `current`.
        previous: NaiveDate,
        /// The offending date.
        current: NaiveDate,
    },
}
