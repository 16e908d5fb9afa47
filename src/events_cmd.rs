//! Events command: extract rainfall events and discharge lags to JSON.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use hydrolag_events::{EventConfig, EventTable, Extraction, LagSummary, extract};

use crate::cli::EventsArgs;
use crate::config::HydrolagConfig;
use crate::convert;
use crate::input;

/// Echo of the effective extraction parameters.
#[derive(Serialize)]
struct ConfigEcho<'a> {
    precip_field: &'a str,
    discharge_field: &'a str,
    quantile: f64,
    min_gap_days: i64,
    window_days: i64,
    require_single_day: bool,
}

#[derive(Serialize)]
struct EventsReport<'a> {
    config: ConfigEcho<'a>,
    threshold: f64,
    n_usable: usize,
    n_starts: usize,
    n_discarded_empty: usize,
    n_discarded_ambiguous: usize,
    lag_summary: Option<LagSummary>,
    events: &'a EventTable,
}

/// Run the event extraction pipeline.
pub fn run(args: EventsArgs) -> Result<()> {
    let _cmd = info_span!("events").entered();

    let config = HydrolagConfig::load(args.config.as_deref())?;
    let event_cfg = convert::build_event_config(&config.io, &config.events)?;
    let series = input::load_series(args.input, &config.io)?;

    let extraction = extract(&series, &event_cfg).context("event extraction failed")?;
    info!(
        n_events = extraction.events().len(),
        threshold = extraction.threshold(),
        "events extracted"
    );

    let json = render(&extraction, &event_cfg)?;
    write_output(args.output.as_deref(), &json)
}

/// Serializes an extraction and its parameters as pretty JSON.
fn render(extraction: &Extraction, cfg: &EventConfig) -> Result<String> {
    let report = EventsReport {
        config: ConfigEcho {
            precip_field: cfg.precip_field(),
            discharge_field: cfg.discharge_field(),
            quantile: cfg.quantile(),
            min_gap_days: cfg.min_gap_days(),
            window_days: cfg.window_days(),
            require_single_day: cfg.require_single_day(),
        },
        threshold: extraction.threshold(),
        n_usable: extraction.n_usable(),
        n_starts: extraction.n_starts(),
        n_discarded_empty: extraction.n_discarded_empty(),
        n_discarded_ambiguous: extraction.n_discarded_ambiguous(),
        lag_summary: extraction.events().lag_summary(),
        events: extraction.events(),
    };
    serde_json::to_string_pretty(&report).context("failed to serialize events")
}

/// Writes `json` to `path`, or to stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;

    /// Thirty dry days at discharge 10, with rain on day 5 and a peak on day 7.
    fn write_fixture(dir: &Path) -> std::path::PathBuf {
        let mut csv = String::from("date,rain,flow\n");
        for day in 1..=30 {
            let rain = if day == 5 { 5.0 } else { 0.0 };
            let flow = if day == 7 { 25.0 } else { 10.0 };
            csv.push_str(&format!("2020-01-{day:02},{rain},{flow}\n"));
        }
        let path = dir.join("daily.csv");
        std::fs::write(&path, csv).unwrap();
        path
    }

    #[test]
    fn end_to_end_writes_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = write_fixture(dir.path());
        let config = dir.path().join("hydrolag.toml");
        std::fs::write(
            &config,
            "[io]\nprecip_var = \"rain\"\ndischarge_var = \"flow\"\n",
        )
        .unwrap();
        let output = dir.path().join("events.json");

        run(EventsArgs {
            config: Some(config),
            input: Some(input),
            output: Some(output.clone()),
        })
        .unwrap();

        let json: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["threshold"], 5.0);
        assert_eq!(json["config"]["precip_field"], "rain");
        assert_eq!(json["config"]["window_days"], 10);
        assert_eq!(json["n_usable"], 30);
        assert_eq!(json["n_starts"], 1);
        assert_eq!(json["n_discarded_ambiguous"], 0);
        assert_eq!(json["lag_summary"]["count"], 1);

        let events = json["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event_date"], "2020-01-05");
        assert_eq!(events[0]["peak_date"], "2020-01-07");
        assert_eq!(events[0]["lag_days"], 2);
        assert_eq!(events[0]["peak_discharge"], 25.0);
        assert_eq!(events[0]["rain_amount"], 5.0);
        assert_eq!(events[0]["n_sig_days_in_window"], 1);
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = write_fixture(dir.path());

        let err = run(EventsArgs {
            config: None,
            input: Some(input),
            output: Some(dir.path().join("events.json")),
        })
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("event extraction failed"));
        assert!(msg.contains("precipitation"));
    }

    #[test]
    fn render_empty_table() {
        let series = hydrolag_events::DailySeries::from_records(&[
            hydrolag_events::DailyRecord {
                date: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                precipitation: Some(1.0),
                discharge: Some(2.0),
            },
            hydrolag_events::DailyRecord {
                date: chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                precipitation: Some(1.0),
                discharge: Some(3.0),
            },
        ])
        .unwrap();
        let cfg = EventConfig::new();
        let extraction = extract(&series, &cfg).unwrap();
        // Both days reach the threshold and share one window.
        assert!(extraction.events().is_empty());

        let json: Value = serde_json::from_str(&render(&extraction, &cfg).unwrap()).unwrap();
        assert_eq!(json["events"], Value::Array(vec![]));
        assert_eq!(json["lag_summary"], Value::Null);
        assert_eq!(json["n_discarded_ambiguous"], 1);
    }
}
