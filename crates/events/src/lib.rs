//! Rainfall event detection and discharge lag extraction.
//!
//! Given a daily series of precipitation and river discharge, this crate
//! finds significant rainfall days, keeps them independent of one another,
//! and measures how many days the discharge takes to peak after each one.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!  │   series     │──▶│  threshold   │──▶│   starts     │──▶│   window     │
//!  │ (drop NaNs)  │   │ (q quantile) │   │ (greedy gap) │   │ (peak, lag)  │
//!  └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use hydrolag_events::{DailyRecord, DailySeries, EventConfig, extract};
//!
//! let start = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
//! let records: Vec<DailyRecord> = (0..30)
//!     .map(|i| DailyRecord {
//!         date: start + chrono::Days::new(i),
//!         precipitation: Some(if i == 4 { 5.0 } else { 0.0 }),
//!         discharge: Some(if i == 6 { 40.0 } else { 10.0 }),
//!     })
//!     .collect();
//!
//! let series = DailySeries::from_records(&records).unwrap();
//! let result = extract(&series, &EventConfig::new()).unwrap();
//!
//! assert_eq!(result.threshold(), 5.0);
//! let event = &result.events().as_slice()[0];
//! assert_eq!(event.lag_days, 2);
//! assert_eq!(event.peak_discharge, 40.0);
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod extract;
pub mod result;
pub mod series;
pub mod starts;
pub mod threshold;
pub mod window;

pub use config::{DEFAULT_DISCHARGE_FIELD, DEFAULT_PRECIP_FIELD, EventConfig};
pub use error::EventError;
pub use event::{Event, EventTable, LagSummary};
pub use extract::extract;
pub use result::Extraction;
pub use series::{DailyRecord, DailySeries, UsableSeries};
pub use starts::select_event_starts;
pub use threshold::precip_threshold;
pub use window::window_bounds;
