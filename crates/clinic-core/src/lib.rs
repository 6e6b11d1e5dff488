//! Core types and trait definitions for the clinic registration service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The registry, the slot grid and the booking flow are written against the
//! [`store::ClinicStore`] trait; backends live in their own crates.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod appointment;
pub mod booking;
pub mod error;
pub mod patient;
pub mod registry;
pub mod schedule;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod memory;
