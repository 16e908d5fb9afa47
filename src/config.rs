use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Hydrolag configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HydrolagConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Event extraction settings.
    #[serde(default)]
    pub events: EventsToml,

    /// Water-year aggregation settings.
    #[serde(default)]
    pub annual: AnnualToml,
}

impl HydrolagConfig {
    /// Reads and parses a TOML config, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_precip_var")]
    pub precip_var: String,
    #[serde(default = "default_discharge_var")]
    pub discharge_var: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            date_column: default_date_column(),
            precip_var: default_precip_var(),
            discharge_var: default_discharge_var(),
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}
fn default_precip_var() -> String {
    hydrolag_events::DEFAULT_PRECIP_FIELD.to_string()
}
fn default_discharge_var() -> String {
    hydrolag_events::DEFAULT_DISCHARGE_FIELD.to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsToml {
    #[serde(default = "default_quantile")]
    pub quantile: f64,
    #[serde(default = "default_gap_days")]
    pub min_gap_days: i64,
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    #[serde(default = "default_true")]
    pub require_single_day: bool,
}

impl Default for EventsToml {
    fn default() -> Self {
        Self {
            quantile: default_quantile(),
            min_gap_days: default_gap_days(),
            window_days: default_window_days(),
            require_single_day: true,
        }
    }
}

fn default_quantile() -> f64 {
    0.9
}
fn default_gap_days() -> i64 {
    10
}
fn default_window_days() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnualToml {
    #[serde(default = "default_start_month")]
    pub start_month: u8,
    #[serde(default = "default_true")]
    pub complete_only: bool,
}

impl Default for AnnualToml {
    fn default() -> Self {
        Self {
            start_month: default_start_month(),
            complete_only: true,
        }
    }
}

fn default_start_month() -> u8 {
    10
}
