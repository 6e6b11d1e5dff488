//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are local wall-clock values stored as `YYYY-MM-DDTHH:MM:SS`,
//! which sorts lexically in chronological order. Matricules are stored in
//! their display form.

use chrono::NaiveDateTime;
use clinic_core::{
  appointment::{Appointment, ScheduleEntry},
  patient::{Matricule, Patient},
};

use crate::{Error, Result};

// ─── NaiveDateTime ───────────────────────────────────────────────────────────

const DT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn encode_dt(dt: NaiveDateTime) -> String { dt.format(DT_FORMAT).to_string() }

pub fn decode_dt(s: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(s, DT_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Matricule ───────────────────────────────────────────────────────────────

pub fn encode_matricule(m: Matricule) -> String { m.to_string() }

pub fn decode_matricule(s: &str) -> Result<Matricule> { Ok(s.parse()?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `patients` row.
pub struct RawPatient {
  pub id:        i64,
  pub name:      String,
  pub phone:     String,
  pub address:   String,
  pub matricule: String,
}

impl RawPatient {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:        row.get(0)?,
      name:      row.get(1)?,
      phone:     row.get(2)?,
      address:   row.get(3)?,
      matricule: row.get(4)?,
    })
  }

  pub fn into_patient(self) -> Result<Patient> {
    Ok(Patient {
      id:        self.id,
      name:      self.name,
      phone:     self.phone,
      address:   self.address,
      matricule: decode_matricule(&self.matricule)?,
    })
  }
}

/// Raw values read directly from an `appointments` row.
pub struct RawAppointment {
  pub id:               i64,
  pub patient_id:       i64,
  pub appointment_time: String,
}

impl RawAppointment {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:               row.get(0)?,
      patient_id:       row.get(1)?,
      appointment_time: row.get(2)?,
    })
  }

  pub fn into_appointment(self) -> Result<Appointment> {
    Ok(Appointment {
      id:               self.id,
      patient_id:       self.patient_id,
      appointment_time: decode_dt(&self.appointment_time)?,
    })
  }
}

/// An `appointments` row joined with its `patients` row; appointment columns
/// first.
pub struct RawScheduleEntry {
  pub appointment: RawAppointment,
  pub patient:     RawPatient,
}

impl RawScheduleEntry {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      appointment: RawAppointment::from_row(row)?,
      patient:     RawPatient {
        id:        row.get(3)?,
        name:      row.get(4)?,
        phone:     row.get(5)?,
        address:   row.get(6)?,
        matricule: row.get(7)?,
      },
    })
  }

  pub fn into_entry(self) -> Result<ScheduleEntry> {
    Ok(ScheduleEntry {
      appointment: self.appointment.into_appointment()?,
      patient:     self.patient.into_patient()?,
    })
  }
}
