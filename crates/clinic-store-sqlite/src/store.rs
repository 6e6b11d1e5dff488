//! [`SqliteStore`] — the SQLite implementation of [`ClinicStore`].

use std::{collections::BTreeSet, path::Path};

use chrono::NaiveDateTime;
use rusqlite::OptionalExtension as _;

use clinic_core::{
  appointment::{Appointment, NewAppointment, ScheduleEntry},
  patient::{Matricule, NewPatient, Patient},
  store::ClinicStore,
};

use crate::{
  Result,
  encode::{
    RawAppointment, RawPatient, RawScheduleEntry, decode_dt, encode_dt,
    encode_matricule,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A clinic store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ClinicStore impl ────────────────────────────────────────────────────────

impl ClinicStore for SqliteStore {
  type Error = crate::Error;

  // ── Patients ──────────────────────────────────────────────────────────────

  async fn insert_patient(
    &self,
    patient: NewPatient,
    matricule: Matricule,
  ) -> Result<Patient> {
    let matricule_str = encode_matricule(matricule);

    let (id, patient) = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO patients (name, phone, address, matricule)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            patient.name,
            patient.phone,
            patient.address,
            matricule_str
          ],
        )?;
        Ok((conn.last_insert_rowid(), patient))
      })
      .await?;

    let NewPatient { name, phone, address } = patient;
    Ok(Patient { id, name, phone, address, matricule })
  }

  async fn last_patient(&self) -> Result<Option<Patient>> {
    let raw: Option<RawPatient> = self
      .conn
      .call(|conn| {
        Ok(conn
          .query_row(
            "SELECT id, name, phone, address, matricule
             FROM patients ORDER BY id DESC LIMIT 1",
            [],
            RawPatient::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawPatient::into_patient).transpose()
  }

  // ── Appointments ──────────────────────────────────────────────────────────

  async fn insert_appointment(
    &self,
    appointment: NewAppointment,
  ) -> Result<Appointment> {
    let patient_id = appointment.patient_id;
    let at_str     = encode_dt(appointment.appointment_time);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO appointments (patient_id, appointment_time)
           VALUES (?1, ?2)",
          rusqlite::params![patient_id, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Appointment {
      id,
      patient_id,
      appointment_time: appointment.appointment_time,
    })
  }

  async fn booked_times(&self) -> Result<BTreeSet<NaiveDateTime>> {
    let raws: Vec<String> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT appointment_time FROM appointments")?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.iter().map(|s| decode_dt(s)).collect()
  }

  async fn list_schedule(&self) -> Result<Vec<ScheduleEntry>> {
    let raws: Vec<RawScheduleEntry> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             a.id, a.patient_id, a.appointment_time,
             p.id, p.name, p.phone, p.address, p.matricule
           FROM appointments a
           JOIN patients p ON p.id = a.patient_id
           ORDER BY a.id",
        )?;
        let rows = stmt
          .query_map([], RawScheduleEntry::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawScheduleEntry::into_entry).collect()
  }

  async fn appointments_for_patient(
    &self,
    patient_id: i64,
  ) -> Result<Vec<Appointment>> {
    let raws: Vec<RawAppointment> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, patient_id, appointment_time
           FROM appointments WHERE patient_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![patient_id], RawAppointment::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAppointment::into_appointment).collect()
  }
}
