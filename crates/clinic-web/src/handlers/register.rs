//! `GET /` and `POST /` — the registration form.

use axum::{
  Form,
  extract::State,
  http::{StatusCode, header},
  response::{Html, IntoResponse, Response},
};
use clinic_core::{booking, patient::NewPatient, store::ClinicStore};
use serde::Deserialize;

use crate::{AppState, error::Error, views};

/// Fields posted by the registration form. Missing fields decode as empty so
/// they can be reported on the re-rendered form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub phone:   String,
  #[serde(default)]
  pub address: String,
}

impl RegistrationForm {
  /// Trimmed input, or the message for the first blank field.
  pub fn validate(&self) -> Result<NewPatient, &'static str> {
    let name = self.name.trim();
    let phone = self.phone.trim();
    let address = self.address.trim();

    if name.is_empty() {
      return Err("Name is required.");
    }
    if phone.is_empty() {
      return Err("Phone is required.");
    }
    if address.is_empty() {
      return Err("Address is required.");
    }
    Ok(NewPatient::new(name, phone, address))
  }
}

/// `GET /`
pub async fn show_form() -> Html<String> {
  Html(views::register_page(&RegistrationForm::default(), None))
}

/// `POST /` — register the patient, book the first free slot of the week
/// starting today, and redirect to the schedule.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<RegistrationForm>,
) -> Result<Response, Error>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  let input = form
    .validate()
    .map_err(|message| Error::BadRequest { form: form.clone(), message })?;

  let reference = state.clock.now();
  let booking = booking::register_and_book(
    state.store.as_ref(),
    &state.grid,
    input,
    reference,
  )
  .await?;

  tracing::info!(
    matricule = %booking.patient.matricule,
    slot = %booking.appointment.appointment_time,
    "patient registered"
  );

  Ok((StatusCode::FOUND, [(header::LOCATION, "/schedule")]).into_response())
}
