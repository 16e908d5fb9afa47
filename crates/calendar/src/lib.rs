//! # hydrolag-calendar
//!
//! Day arithmetic on Gregorian dates for daily hydrological records.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"add_days_saturating()"| A
//!     A -->|"days_between()"| B["whole days (i64)"]
//!     A -->|"water_year()"| C["water year (i32)"]
//!     C -->|"water_year_bounds()"| D["(first, last) NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use hydrolag_calendar::{add_days_saturating, days_between, water_year};
//!
//! let start = NaiveDate::from_ymd_opt(2020, 2, 25).unwrap();
//! let end = add_days_saturating(start, 10);
//! assert_eq!(end, NaiveDate::from_ymd_opt(2020, 3, 6).unwrap());
//! assert_eq!(days_between(start, end), 10);
//!
//! // October-start water year: Oct 2020 belongs to WY 2021.
//! let oct = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
//! assert_eq!(water_year(oct, 10).unwrap(), 2021);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `days` | Saturating day offsets and whole-day differences |
//! | `water_year` | Water year computation and bounds |
//! | `error` | Error types |

mod days;
mod error;
mod water_year;

pub use days::{add_days_saturating, days_between};
pub use error::CalendarError;
pub use water_year::{water_year, water_year_bounds, water_year_length};
