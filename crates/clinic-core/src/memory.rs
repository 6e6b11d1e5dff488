//! In-memory [`ClinicStore`] used by this crate's tests.

use std::{collections::BTreeSet, convert::Infallible, sync::Mutex};

use chrono::NaiveDateTime;

use crate::{
  appointment::{Appointment, NewAppointment, ScheduleEntry},
  patient::{Matricule, NewPatient, Patient},
  store::ClinicStore,
};

#[derive(Default)]
pub struct MemoryStore {
  inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
  patients:     Vec<Patient>,
  appointments: Vec<Appointment>,
}

impl MemoryStore {
  fn with<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
    let mut tables = self.inner.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut tables)
  }
}

impl ClinicStore for MemoryStore {
  type Error = Infallible;

  async fn insert_patient(
    &self,
    patient: NewPatient,
    matricule: Matricule,
  ) -> Result<Patient, Infallible> {
    Ok(self.with(|t| {
      let patient = Patient {
        id: t.patients.len() as i64 + 1,
        name: patient.name,
        phone: patient.phone,
        address: patient.address,
        matricule,
      };
      t.patients.push(patient.clone());
      patient
    }))
  }

  async fn last_patient(&self) -> Result<Option<Patient>, Infallible> {
    Ok(self.with(|t| t.patients.iter().max_by_key(|p| p.id).cloned()))
  }

  async fn insert_appointment(
    &self,
    appointment: NewAppointment,
  ) -> Result<Appointment, Infallible> {
    Ok(self.with(|t| {
      let appointment = Appointment {
        id:               t.appointments.len() as i64 + 1,
        patient_id:       appointment.patient_id,
        appointment_time: appointment.appointment_time,
      };
      t.appointments.push(appointment.clone());
      appointment
    }))
  }

  async fn booked_times(&self) -> Result<BTreeSet<NaiveDateTime>, Infallible> {
    Ok(self.with(|t| {
      t.appointments.iter().map(|a| a.appointment_time).collect()
    }))
  }

  async fn list_schedule(&self) -> Result<Vec<ScheduleEntry>, Infallible> {
    Ok(self.with(|t| {
      t.appointments
        .iter()
        .filter_map(|a| {
          let patient = t.patients.iter().find(|p| p.id == a.patient_id)?;
          Some(ScheduleEntry {
            appointment: a.clone(),
            patient:     patient.clone(),
          })
        })
        .collect()
    }))
  }

  async fn appointments_for_patient(
    &self,
    patient_id: i64,
  ) -> Result<Vec<Appointment>, Infallible> {
    Ok(self.with(|t| {
      t.appointments
        .iter()
        .filter(|a| a.patient_id == patient_id)
        .cloned()
        .collect()
    }))
  }
}
