//! SQL schema for the clinic SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Patients are written once at registration and never updated.
CREATE TABLE IF NOT EXISTS patients (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    phone     TEXT NOT NULL,
    address   TEXT NOT NULL,
    matricule TEXT NOT NULL UNIQUE   -- 'PAT-0001', 'PAT-0002', ...
);

CREATE TABLE IF NOT EXISTS appointments (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id       INTEGER NOT NULL REFERENCES patients(id),
    appointment_time TEXT NOT NULL UNIQUE   -- local 'YYYY-MM-DDTHH:MM:SS'
);

CREATE INDEX IF NOT EXISTS appointments_patient_idx ON appointments(patient_id);

PRAGMA user_version = 1;
";
