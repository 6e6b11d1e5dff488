//! Patients and their matricules.
//!
//! A patient is written once at registration and never updated. The
//! matricule is the human-readable code printed on the schedule; it is
//! derived from the previous patient's matricule, never chosen by callers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Matricule ───────────────────────────────────────────────────────────────

/// A patient code of the form `PAT-0001`.
///
/// The numeric suffix is zero-padded to four digits and widens past
/// `PAT-9999` instead of wrapping.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Matricule(u32);

impl Matricule {
  pub const PREFIX: &'static str = "PAT-";

  /// The matricule handed to the first patient ever registered.
  pub const FIRST: Self = Self(1);

  pub fn new(number: u32) -> Self { Self(number) }

  pub fn number(&self) -> u32 { self.0 }

  /// The matricule issued right after this one.
  pub fn next(&self) -> Result<Self> {
    self
      .0
      .checked_add(1)
      .map(Self)
      .ok_or_else(|| Error::MalformedMatricule(self.to_string()))
  }
}

impl fmt::Display for Matricule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{:04}", Self::PREFIX, self.0)
  }
}

impl FromStr for Matricule {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let malformed = || Error::MalformedMatricule(s.to_owned());

    let digits = s
      .strip_prefix(Self::PREFIX)
      .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
      .ok_or_else(malformed)?;

    digits.parse().map(Self).map_err(|_| malformed())
  }
}

impl TryFrom<String> for Matricule {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<Matricule> for String {
  fn from(m: Matricule) -> Self { m.to_string() }
}

// ─── Patient ─────────────────────────────────────────────────────────────────

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
  /// Store-assigned; strictly increasing in registration order.
  pub id:        i64,
  pub name:      String,
  pub phone:     String,
  pub address:   String,
  pub matricule: Matricule,
}

/// Input to [`crate::registry::register`]. The matricule and the id are
/// always assigned by the registry and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
  pub name:    String,
  pub phone:   String,
  pub address: String,
}

impl NewPatient {
  pub fn new(
    name: impl Into<String>,
    phone: impl Into<String>,
    address: impl Into<String>,
  ) -> Self {
    Self {
      name:    name.into(),
      phone:   phone.into(),
      address: address.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_matricule_is_pat_0001() {
    assert_eq!(Matricule::FIRST.to_string(), "PAT-0001");
  }

  #[test]
  fn parse_and_increment() {
    let m: Matricule = "PAT-0004".parse().unwrap();
    assert_eq!(m.number(), 4);
    assert_eq!(m.next().unwrap().to_string(), "PAT-0005");
  }

  #[test]
  fn widens_past_four_digits() {
    let m: Matricule = "PAT-9999".parse().unwrap();
    let next = m.next().unwrap();
    assert_eq!(next.to_string(), "PAT-10000");
    assert_eq!("PAT-10000".parse::<Matricule>().unwrap(), next);
  }

  #[test]
  fn rejects_malformed_codes() {
    for bad in ["", "PAT-", "PAT-12a4", "pat-0001", "0001", "PAT--001", "PAT-+12"]
    {
      let err = bad.parse::<Matricule>().unwrap_err();
      assert!(
        matches!(err, Error::MalformedMatricule(ref s) if s == bad),
        "{bad:?} gave {err:?}"
      );
    }
  }

  #[test]
  fn suffix_overflow_is_malformed() {
    let too_big = format!("PAT-{}", u64::from(u32::MAX) + 1);
    assert!(too_big.parse::<Matricule>().is_err());

    let last = Matricule::new(u32::MAX);
    assert!(matches!(last.next(), Err(Error::MalformedMatricule(_))));
  }
}
