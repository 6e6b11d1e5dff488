//! Error type for `clinic-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A stored value failed a domain check (e.g. an unparsable matricule).
  #[error("core error: {0}")]
  Core(#[from] clinic_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

impl From<Error> for clinic_core::Error {
  /// Domain errors found while decoding rows keep their own variant; the rest
  /// are storage failures.
  fn from(e: Error) -> Self {
    match e {
      Error::Core(core) => core,
      other => clinic_core::Error::store(other),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
