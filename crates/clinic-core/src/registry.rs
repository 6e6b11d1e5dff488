//! Patient registration and matricule allocation.

use crate::{
  Error, Result,
  patient::{Matricule, NewPatient, Patient},
  store::ClinicStore,
};

/// The matricule the next registered patient will receive: the successor of
/// the most recent patient's matricule, or [`Matricule::FIRST`] on an empty
/// store.
pub async fn next_matricule<S: ClinicStore>(store: &S) -> Result<Matricule> {
  match store.last_patient().await.map_err(Into::<Error>::into)? {
    Some(last) => last.matricule.next(),
    None => Ok(Matricule::FIRST),
  }
}

/// Allocate a matricule for `input` and persist the patient.
pub async fn register<S: ClinicStore>(
  store: &S,
  input: NewPatient,
) -> Result<Patient> {
  let matricule = next_matricule(store).await?;
  store
    .insert_patient(input, matricule)
    .await
    .map_err(Into::into)
}
