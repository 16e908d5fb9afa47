//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use hydrolag_events::EventConfig;

use crate::config::{EventsToml, IoConfig};

/// Builds a validated [`EventConfig`] from the TOML I/O and events sections.
pub fn build_event_config(io: &IoConfig, events: &EventsToml) -> Result<EventConfig> {
    let cfg = EventConfig::new()
        .with_precip_field(&io.precip_var)
        .with_discharge_field(&io.discharge_var)
        .with_quantile(events.quantile)
        .with_min_gap_days(events.min_gap_days)
        .with_window_days(events.window_days)
        .with_require_single_day(events.require_single_day);
    cfg.validate().context("invalid [events] configuration")?;
    Ok(cfg)
}
