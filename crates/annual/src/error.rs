//! Error types for the hydrolag-annual crate.

use hydrolag_calendar::CalendarError;

/// Error type for all fallible operations in the hydrolag-annual crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnnualError {
    /// Returned when the requested column is not present in the series.
    #[error("field '{name}' not found in series")]
    MissingField {
        /// Name of the missing column.
        name: String,
    },

    /// Returned when there are no water years to test.
    #[error("annual series is empty")]
    EmptyInput,

    /// Wraps an error from the hydrolag-calendar crate.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Returned when the trend test fails or reports an invalid result.
    #[error("trend test failed: {reason}")]
    TrendTest {
        /// Description of the failure.
        reason: String,
    },
}
