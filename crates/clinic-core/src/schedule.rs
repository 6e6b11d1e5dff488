//! The weekly slot grid and first-free-slot assignment.
//!
//! The grid is never persisted. It is derived from a reference date on every
//! booking attempt and compared against the timestamps already in the store.

use std::{collections::BTreeSet, iter};

use chrono::{Days, NaiveDateTime, NaiveTime, TimeDelta};

use crate::{Error, Result};

// ─── Grid definition ─────────────────────────────────────────────────────────

/// Shape of the bookable week: how many days, when each day opens and
/// closes, and how long a slot lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
  days:      u32,
  day_start: NaiveTime,
  day_end:   NaiveTime,
  step:      TimeDelta,
}

impl SlotGrid {
  /// Validate and build a grid. Slots start at `day_start` and then every
  /// `step`; a slot is kept only if it ends by `day_end`.
  pub fn new(
    days: u32,
    day_start: NaiveTime,
    day_end: NaiveTime,
    step: TimeDelta,
  ) -> Result<Self> {
    if days == 0 {
      return Err(Error::InvalidGrid("a grid needs at least one day".into()));
    }
    if day_start >= day_end {
      return Err(Error::InvalidGrid(format!(
        "day start {day_start} is not before day end {day_end}"
      )));
    }
    if step <= TimeDelta::zero() {
      return Err(Error::InvalidGrid(format!("slot length {step} is not positive")));
    }
    let (first_end, wrapped_secs) = day_start.overflowing_add_signed(step);
    if wrapped_secs != 0 || first_end > day_end {
      return Err(Error::InvalidGrid(format!(
        "a {step} slot starting at {day_start} does not end by {day_end}"
      )));
    }
    Ok(Self { days, day_start, day_end, step })
  }

  /// Five days, 08:00 to 16:30, two-hour slots.
  pub fn standard() -> Self {
    Self {
      days:      5,
      day_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
      day_end:   NaiveTime::from_hms_opt(16, 30, 0).unwrap_or_default(),
      step:      TimeDelta::hours(2),
    }
  }

  pub fn days(&self) -> u32 { self.days }

  pub fn day_start(&self) -> NaiveTime { self.day_start }

  pub fn day_end(&self) -> NaiveTime { self.day_end }

  pub fn step(&self) -> TimeDelta { self.step }

  /// Every slot for `days` consecutive calendar days starting on the date of
  /// `reference`, earliest first. The time of day of `reference` is ignored,
  /// and the span is not re-anchored to a Monday.
  pub fn slots(&self, reference: NaiveDateTime) -> Vec<NaiveDateTime> {
    let first_day = reference.date();
    let step = self.step;

    (0..self.days)
      .filter_map(|offset| first_day.checked_add_days(Days::new(offset.into())))
      .flat_map(|day| {
        let end = day.and_time(self.day_end);
        iter::successors(Some(day.and_time(self.day_start)), move |t| {
          t.checked_add_signed(step)
        })
        .take_while(move |t| t.checked_add_signed(step).is_some_and(|e| e <= end))
      })
      .collect()
  }
}

impl Default for SlotGrid {
  fn default() -> Self { Self::standard() }
}

// ─── Operations ──────────────────────────────────────────────────────────────

/// The standard grid for the five days starting at `reference`'s date.
pub fn generate_weekly_grid(reference: NaiveDateTime) -> Vec<NaiveDateTime> {
  SlotGrid::standard().slots(reference)
}

/// The first slot of `grid` that is not in `booked`, or `None` when the grid
/// is full. `booked` may hold timestamps from any week.
pub fn assign_slot(
  grid: &[NaiveDateTime],
  booked: &BTreeSet<NaiveDateTime>,
) -> Option<NaiveDateTime> {
  grid.iter().copied().find(|slot| !booked.contains(slot))
}
