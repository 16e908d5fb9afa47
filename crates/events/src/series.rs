//! Daily series container and missing-value filtering.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::{DEFAULT_DISCHARGE_FIELD, DEFAULT_PRECIP_FIELD};
use crate::error::EventError;

/// One day of precipitation and discharge.
///
/// Either value may be missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Precipitation on that day.
    pub precipitation: Option<f64>,
    /// Discharge on that day.
    pub discharge: Option<f64>,
}

/// Date-indexed daily series with named numeric columns.
///
/// Dates are strictly increasing, so every date appears once. Gaps between
/// dates are allowed. Every column holds one entry per date; `None` marks a
/// missing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    dates: Vec<NaiveDate>,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl DailySeries {
    /// Creates a series with the given dates and no columns.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnorderedDates`] if the dates are not strictly
    /// increasing.
    pub fn new(dates: Vec<NaiveDate>) -> Result<Self, EventError> {
        if let Some(index) = dates.windows(2).position(|w| w[0] >= w[1]) {
            return Err(EventError::UnorderedDates {
                index: index + 1,
                previous: dates[index],
                current: dates[index + 1],
            });
        }
        Ok(Self {
            dates,
            columns: BTreeMap::new(),
        })
    }

    /// Builds a series from records, storing values under the default
    /// `"precipitation"` and `"discharge"` column names.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnorderedDates`] if the records are not in
    /// strictly increasing date order.
    pub fn from_records(records: &[DailyRecord]) -> Result<Self, EventError> {
        let dates = records.iter().map(|r| r.date).collect();
        Self::new(dates)?
            .with_column(
                DEFAULT_PRECIP_FIELD,
                records.iter().map(|r| r.precipitation).collect(),
            )?
            .with_column(
                DEFAULT_DISCHARGE_FIELD,
                records.iter().map(|r| r.discharge).collect(),
            )
    }

    /// Adds (or replaces) a column and returns the series.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::LengthMismatch`] if `values` does not have one
    /// entry per date.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<Self, EventError> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    /// Adds (or replaces) a column in place.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::LengthMismatch`] if `values` does not have one
    /// entry per date.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<(), EventError> {
        let name = name.into();
        if values.len() != self.dates.len() {
            return Err(EventError::LengthMismatch {
                column: name,
                expected: self.dates.len(),
                got: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Returns the dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns a column by name.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Returns the column names in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Returns the number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the series has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Drops every record missing either field.
    ///
    /// NaN counts as missing. Infinite values are kept.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingField`] if either column does not exist.
    pub fn usable(
        &self,
        precip_field: &str,
        discharge_field: &str,
    ) -> Result<UsableSeries, EventError> {
        let precip = self.require(precip_field)?;
        let discharge = self.require(discharge_field)?;

        let mut usable = UsableSeries::default();
        for ((&date, &p), &q) in self.dates.iter().zip(precip).zip(discharge) {
            if let (Some(p), Some(q)) = (present(p), present(q)) {
                usable.dates.push(date);
                usable.precip.push(p);
                usable.discharge.push(q);
            }
        }
        Ok(usable)
    }

    fn require(&self, name: &str) -> Result<&[Option<f64>], EventError> {
        self.column(name).ok_or_else(|| EventError::MissingField {
            name: name.to_string(),
        })
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Records with both precipitation and discharge present, in date order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsableSeries {
    dates: Vec<NaiveDate>,
    precip: Vec<f64>,
    discharge: Vec<f64>,
}

impl UsableSeries {
    /// Returns the dates of the usable records.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the precipitation of the usable records.
    pub fn precip(&self) -> &[f64] {
        &self.precip
    }

    /// Returns the discharge of the usable records.
    pub fn discharge(&self) -> &[f64] {
        &self.discharge
    }

    /// Returns the number of usable records.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if no record is usable.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
