//! Configuration for event extraction.

use crate::error::EventError;

/// Default name of the precipitation column.
pub const DEFAULT_PRECIP_FIELD: &str = "precipitation";

/// Default name of the discharge column.
pub const DEFAULT_DISCHARGE_FIELD: &str = "discharge";

/// Configuration for [`extract`](crate::extract).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use hydrolag_events::EventConfig;
///
/// let config = EventConfig::new()
///     .with_precip_field("Gauge Precip (in)")
///     .with_quantile(0.95)
///     .with_window_days(7);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct EventConfig {
    precip_field: String,
    discharge_field: String,
    quantile: f64,
    min_gap_days: i64,
    window_days: i64,
    require_single_day: bool,
}

impl EventConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `precip_field = "precipitation"`,
    /// `discharge_field = "discharge"`, `quantile = 0.9`,
    /// `min_gap_days = 10`, `window_days = 10`, `require_single_day = true`.
    pub fn new() -> Self {
        Self {
            precip_field: DEFAULT_PRECIP_FIELD.to_string(),
            discharge_field: DEFAULT_DISCHARGE_FIELD.to_string(),
            quantile: 0.9,
            min_gap_days: 10,
            window_days: 10,
            require_single_day: true,
        }
    }

    /// Sets the name of the precipitation column.
    pub fn with_precip_field(mut self, name: impl Into<String>) -> Self {
        self.precip_field = name.into();
        self
    }

    /// Sets the name of the discharge column.
    pub fn with_discharge_field(mut self, name: impl Into<String>) -> Self {
        self.discharge_field = name.into();
        self
    }

    /// Sets the quantile used to derive the precipitation threshold.
    pub fn with_quantile(mut self, q: f64) -> Self {
        self.quantile = q;
        self
    }

    /// Sets the minimum number of days between independent event starts.
    pub fn with_min_gap_days(mut self, days: i64) -> Self {
        self.min_gap_days = days;
        self
    }

    /// Sets the number of days after an event start searched for the
    /// discharge peak.
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    /// Sets whether events whose window holds more than one significant
    /// rain day are discarded.
    pub fn with_require_single_day(mut self, require: bool) -> Self {
        self.require_single_day = require;
        self
    }

    // --- Accessors ---

    /// Returns the precipitation column name.
    pub fn precip_field(&self) -> &str {
        &self.precip_field
    }

    /// Returns the discharge column name.
    pub fn discharge_field(&self) -> &str {
        &self.discharge_field
    }

    /// Returns the threshold quantile.
    pub fn quantile(&self) -> f64 {
        self.quantile
    }

    /// Returns the minimum gap between event starts, in days.
    pub fn min_gap_days(&self) -> i64 {
        self.min_gap_days
    }

    /// Returns the peak search window, in days.
    pub fn window_days(&self) -> i64 {
        self.window_days
    }

    /// Returns whether multi-day rain windows are discarded.
    pub fn require_single_day(&self) -> bool {
        self.require_single_day
    }

    /// Validates this configuration.
    ///
    /// Checks that the quantile is finite and in the open interval (0, 1)
    /// and that both day counts are non-negative.
    pub fn validate(&self) -> Result<(), EventError> {
        if !self.quantile.is_finite() || self.quantile <= 0.0 || self.quantile >= 1.0 {
            return Err(EventError::InvalidParameter {
                reason: format!("q must be in (0, 1), got {}", self.quantile),
            });
        }
        if self.min_gap_days < 0 {
            return Err(EventError::InvalidParameter {
                reason: format!(
                    "min_gap_days must be non-negative, got {}",
                    self.min_gap_days
                ),
            });
        }
        if self.window_days < 0 {
            return Err(EventError::InvalidParameter {
                reason: format!("window_days must be non-negative, got {}", self.window_days),
            });
        }
        Ok(())
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self::new()
    }
}
