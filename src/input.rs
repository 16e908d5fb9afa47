//! CSV input: one date column plus any number of numeric columns.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use tracing::info;

use hydrolag_events::DailySeries;

use crate::config::IoConfig;

/// Cell values that count as missing, besides an empty cell. This is the
/// pandas `read_csv` default NA set.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Resolves the input path (CLI flag first, then `[io].input`) and reads it.
pub fn load_series(cli_input: Option<PathBuf>, io: &IoConfig) -> Result<DailySeries> {
    let input = cli_input
        .or_else(|| io.input.clone())
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;

    info!(path = %input.display(), "reading daily series");
    let series = read_csv(&input, &io.date_column)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;
    info!(
        n_days = series.len(),
        columns = ?series.column_names().collect::<Vec<_>>(),
        "daily series loaded"
    );
    Ok(series)
}

/// Reads a daily CSV file.
pub fn read_csv(path: &Path, date_column: &str) -> Result<DailySeries> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    parse_daily_csv(file, date_column)
}

/// Parses CSV data with a header row into a [`DailySeries`].
///
/// `date_column` holds `YYYY-MM-DD` dates and every other column is parsed
/// as an optional number. Rows must be in strictly increasing date order.
pub fn parse_daily_csv<R: Read>(reader: R, date_column: &str) -> Result<DailySeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("failed to read CSV header")?.clone();
    let Some(date_idx) = headers.iter().position(|h| h == date_column) else {
        bail!("date column '{date_column}' not found in CSV header");
    };
    let names: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != date_idx)
        .map(|(i, h)| (i, h.to_string()))
        .collect();

    let mut dates = Vec::new();
    let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); names.len()];
    for (row, record) in rdr.records().enumerate() {
        // Header is line 1.
        let line = row + 2;
        let record = record.with_context(|| format!("malformed CSV record at line {line}"))?;

        let raw_date = record.get(date_idx).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .with_context(|| format!("line {line}: invalid date '{raw_date}'"))?;
        dates.push(date);

        for ((idx, name), column) in names.iter().zip(values.iter_mut()) {
            let cell = record.get(*idx).unwrap_or_default();
            let value = parse_cell(cell)
                .with_context(|| format!("line {line}, column '{name}': invalid number '{cell}'"))?;
            column.push(value);
        }
    }

    let mut series =
        DailySeries::new(dates).context("CSV rows must be sorted by date with no duplicates")?;
    for ((_, name), column) in names.into_iter().zip(values) {
        series.insert_column(name, column)?;
    }
    Ok(series)
}

fn parse_cell(cell: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    if cell.is_empty() || MISSING_MARKERS.contains(&cell) {
        return Ok(None);
    }
    cell.parse().map(Some)
}
