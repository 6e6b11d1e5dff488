//! The registration flow: register a patient, then book the first free slot.
//!
//! Steps run strictly in order (read last patient, write patient, read booked
//! slots, write appointment). Nothing guards the gap between reading the
//! booked slots and writing the appointment; backends may reject a duplicate
//! timestamp.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
  Error, Result,
  appointment::{Appointment, NewAppointment},
  patient::{NewPatient, Patient},
  registry,
  schedule::{SlotGrid, assign_slot},
  store::ClinicStore,
};

/// A registered patient together with the appointment booked for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
  pub patient:     Patient,
  pub appointment: Appointment,
}

/// Book `patient` into the first slot of `grid` not already taken by any
/// appointment in the store.
///
/// Fails with [`Error::NoAvailableSlot`] when the grid is full; no
/// appointment is written in that case.
pub async fn book<S: ClinicStore>(
  store: &S,
  patient: &Patient,
  grid: &[NaiveDateTime],
) -> Result<Appointment> {
  let booked = store.booked_times().await.map_err(Into::<Error>::into)?;

  let slot = assign_slot(grid, &booked).ok_or(Error::NoAvailableSlot {
    matricule: patient.matricule,
  })?;

  store
    .insert_appointment(NewAppointment {
      patient_id:       patient.id,
      appointment_time: slot,
    })
    .await
    .map_err(Into::into)
}

/// Register `input` and book them against `grid` laid out from
/// `reference`'s date.
///
/// On [`Error::NoAvailableSlot`] the patient remains registered without an
/// appointment.
pub async fn register_and_book<S: ClinicStore>(
  store: &S,
  grid: &SlotGrid,
  input: NewPatient,
  reference: NaiveDateTime,
) -> Result<Booking> {
  let patient = registry::register(store, input).await?;
  let slots = grid.slots(reference);
  let appointment = book(store, &patient, &slots).await?;
  Ok(Booking { patient, appointment })
}
