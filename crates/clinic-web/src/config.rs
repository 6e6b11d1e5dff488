//! Server configuration.
//!
//! Values are layered: built-in defaults, then the optional TOML file, then
//! `CLINIC_*` environment variables (nested keys use `__`, e.g.
//! `CLINIC_SCHEDULE__DAYS=6`).

use std::path::{Path, PathBuf};

use chrono::{NaiveTime, TimeDelta};
use clinic_core::schedule::SlotGrid;
use config::ConfigError;
use serde::Deserialize;

/// Runtime server configuration, deserialised from `clinic.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  pub schedule:   ScheduleConfig,
}

/// The `[schedule]` table: the shape of the bookable week.
#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
  pub days:         u32,
  /// `HH:MM`, local time.
  pub day_start:    String,
  /// `HH:MM`, local time. The last slot starts strictly before this.
  pub day_end:      String,
  pub slot_minutes: i64,
}

impl ServerConfig {
  /// Load the configuration, treating a missing file as empty.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5000_i64)?
      .set_default("store_path", "clinic.db")?
      .set_default("schedule.days", 5_i64)?
      .set_default("schedule.day_start", "08:00")?
      .set_default("schedule.day_end", "16:30")?
      .set_default("schedule.slot_minutes", 120_i64)?
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("CLINIC")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }
}

impl ScheduleConfig {
  /// Validate the table into a [`SlotGrid`].
  pub fn to_grid(&self) -> clinic_core::Result<SlotGrid> {
    let step = TimeDelta::try_minutes(self.slot_minutes).ok_or_else(|| {
      clinic_core::Error::InvalidGrid(format!(
        "slot length of {} minutes is out of range",
        self.slot_minutes
      ))
    })?;
    SlotGrid::new(
      self.days,
      parse_clock_time(&self.day_start)?,
      parse_clock_time(&self.day_end)?,
      step,
    )
  }
}

fn parse_clock_time(s: &str) -> clinic_core::Result<NaiveTime> {
  NaiveTime::parse_from_str(s, "%H:%M")
    .map_err(|e| clinic_core::Error::InvalidGrid(format!("{s:?}: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn schedule(day_start: &str, day_end: &str, slot_minutes: i64) -> ScheduleConfig {
    ScheduleConfig {
      days: 5,
      day_start: day_start.into(),
      day_end: day_end.into(),
      slot_minutes,
    }
  }

  #[test]
  fn defaults_apply_without_a_file() {
    let cfg = ServerConfig::load(Path::new("definitely-missing-clinic.toml"))
      .unwrap();
    assert_eq!(cfg.schedule.days, 5);
    assert_eq!(cfg.schedule.day_start, "08:00");
    assert_eq!(cfg.schedule.day_end, "16:30");
    assert_eq!(cfg.schedule.slot_minutes, 120);
    assert_eq!(cfg.schedule.to_grid().unwrap(), SlotGrid::standard());
  }

  #[test]
  fn schedule_table_builds_custom_grid() {
    let grid = schedule("09:00", "12:00", 60).to_grid().unwrap();
    assert_eq!(grid.day_start(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    assert_eq!(grid.step(), TimeDelta::hours(1));
  }

  #[test]
  fn bad_schedule_tables_are_rejected() {
    assert!(schedule("8am", "16:30", 120).to_grid().is_err());
    assert!(schedule("16:30", "08:00", 120).to_grid().is_err());
    assert!(schedule("08:00", "16:30", 0).to_grid().is_err());
  }

  #[test]
  fn out_of_range_slot_length_is_an_error() {
    for minutes in [i64::MAX, i64::MIN] {
      let err = schedule("08:00", "16:30", minutes).to_grid().unwrap_err();
      assert!(matches!(err, clinic_core::Error::InvalidGrid(_)), "{err:?}");
    }
  }
}
