//! Appointments and the schedule read model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::patient::Patient;

/// A booked slot. Always holds one of the slot grid's timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
  pub id:               i64,
  pub patient_id:       i64,
  /// Local wall-clock time; no timezone is attached.
  pub appointment_time: NaiveDateTime,
}

/// Input to [`crate::store::ClinicStore::insert_appointment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAppointment {
  pub patient_id:       i64,
  pub appointment_time: NaiveDateTime,
}

/// One row of the schedule page: an appointment with the patient who holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
  pub appointment: Appointment,
  pub patient:     Patient,
}
