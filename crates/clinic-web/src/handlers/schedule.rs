//! `GET /schedule` — every booked appointment.

use axum::{extract::State, response::Html};
use clinic_core::store::ClinicStore;

use crate::{AppState, error::Error, views};

pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  let entries = state
    .store
    .list_schedule()
    .await
    .map_err(Into::<clinic_core::Error>::into)?;
  Ok(Html(views::schedule_page(&entries)))
}
