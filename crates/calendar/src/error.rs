//! Error types for the hydrolag-calendar crate.

/// Error type for all fallible operations in the hydrolag-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a water year's bounds fall outside the representable
    /// calendar.
    #[error("water year {year} is outside the supported date range")]
    YearOutOfRange {
        /// The water year that could not be represented.
        year: i32,
    },
}
