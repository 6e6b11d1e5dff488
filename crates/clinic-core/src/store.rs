//! The `ClinicStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `clinic-store-sqlite`).
//! The registry and the booking flow depend on this abstraction, not on any
//! concrete backend.

use std::{collections::BTreeSet, future::Future};

use chrono::NaiveDateTime;

use crate::{
  appointment::{Appointment, NewAppointment, ScheduleEntry},
  patient::{Matricule, NewPatient, Patient},
};

/// Abstraction over the clinic's persistence backend.
///
/// Patients and appointments are append-only: nothing is updated or deleted.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
///
/// Backend errors convert into [`crate::Error`]; a backend that finds a
/// malformed value in its rows should map it to the matching domain variant
/// rather than to [`crate::Error::Store`].
pub trait ClinicStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static + Into<crate::Error>;

  // ── Patients ──────────────────────────────────────────────────────────

  /// Persist a patient under `matricule` and return it with its new id.
  fn insert_patient(
    &self,
    patient: NewPatient,
    matricule: Matricule,
  ) -> impl Future<Output = Result<Patient, Self::Error>> + Send + '_;

  /// The most recently created patient (highest id), if any.
  fn last_patient(
    &self,
  ) -> impl Future<Output = Result<Option<Patient>, Self::Error>> + Send + '_;

  // ── Appointments ──────────────────────────────────────────────────────

  fn insert_appointment(
    &self,
    appointment: NewAppointment,
  ) -> impl Future<Output = Result<Appointment, Self::Error>> + Send + '_;

  /// Every booked timestamp, across all patients and all weeks.
  fn booked_times(
    &self,
  ) -> impl Future<Output = Result<BTreeSet<NaiveDateTime>, Self::Error>> + Send + '_;

  /// All appointments joined with their patient, in insertion order.
  fn list_schedule(
    &self,
  ) -> impl Future<Output = Result<Vec<ScheduleEntry>, Self::Error>> + Send + '_;

  /// The appointments held by one patient, in insertion order.
  fn appointments_for_patient(
    &self,
    patient_id: i64,
  ) -> impl Future<Output = Result<Vec<Appointment>, Self::Error>> + Send + '_;
}
