//! Water-year aggregation of daily series.
//!
//! Sums a daily column into one total per water year and hands the totals to
//! a caller-supplied trend test.
//!
//! ```text
//! DailySeries ──annual_totals()──▶ AnnualSeries ──summarize_trend(TrendTest)──▶ TrendResult
//! ```
//!
//! No statistical test ships with this crate. Implement [`TrendTest`] (or
//! pass a closure) to plug one in.

mod error;
mod totals;
mod trend;

pub use error::AnnualError;
pub use totals::{AnnualSeries, TrendLine, annual_totals};
pub use trend::{TrendDirection, TrendResult, TrendTest, summarize_trend};
