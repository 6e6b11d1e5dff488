//! Error types for `clinic-core`.

use std::convert::Infallible;

use thiserror::Error;

use crate::patient::Matricule;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("malformed matricule: {0:?}")]
  MalformedMatricule(String),

  /// Every slot of the grid is already booked. The patient carrying
  /// `matricule` was registered but has no appointment.
  #[error("no appointment slot available for {matricule}")]
  NoAvailableSlot { matricule: Matricule },

  #[error("invalid slot grid: {0}")]
  InvalidGrid(String),
}

impl Error {
  /// Box a backend error into [`Error::Store`].
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl From<Infallible> for Error {
  fn from(e: Infallible) -> Self { match e {} }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
