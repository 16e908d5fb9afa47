//! Annual command: water-year totals of one daily column to JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use hydrolag_annual::{AnnualSeries, TrendLine, annual_totals};

use crate::cli::AnnualArgs;
use crate::config::HydrolagConfig;
use crate::events_cmd::write_output;
use crate::input;

#[derive(Serialize)]
struct AnnualReport<'a> {
    field: &'a str,
    start_month: u8,
    complete_only: bool,
    years: &'a [i32],
    totals: &'a [f64],
    trend_line: Option<TrendLine>,
}

/// Run the water-year aggregation.
pub fn run(args: AnnualArgs) -> Result<()> {
    let _cmd = info_span!("annual").entered();

    let config = HydrolagConfig::load(args.config.as_deref())?;
    let series = input::load_series(args.input, &config.io)?;

    let annual = annual_totals(
        &series,
        &args.field,
        config.annual.start_month,
        config.annual.complete_only,
    )
    .with_context(|| format!("failed to aggregate '{}' per water year", args.field))?;
    info!(n_years = annual.len(), "annual totals computed");

    let json = render(&args.field, &annual, config.annual.complete_only)?;
    write_output(args.output.as_deref(), &json)
}

fn render(field: &str, annual: &AnnualSeries, complete_only: bool) -> Result<String> {
    let report = AnnualReport {
        field,
        start_month: annual.start_month(),
        complete_only,
        years: annual.years(),
        totals: annual.totals(),
        trend_line: annual.trend_line(),
    };
    serde_json::to_string_pretty(&report).context("failed to serialize annual totals")
}
