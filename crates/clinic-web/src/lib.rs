//! HTTP front end for the clinic registration service.
//!
//! Exposes an axum [`Router`] with three routes backed by any
//! [`ClinicStore`]:
//!
//! | Method | Path        | Notes |
//! |--------|-------------|-------|
//! | `GET`  | `/`         | Registration form |
//! | `POST` | `/`         | Form fields `name`, `phone`, `address`; 302 to `/schedule` |
//! | `GET`  | `/schedule` | Every booked appointment |

pub mod config;
pub mod error;
pub mod handlers;
pub mod views;

pub use config::ServerConfig;
pub use error::Error;

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::{Local, NaiveDateTime};
use clinic_core::{schedule::SlotGrid, store::ClinicStore};
use tower_http::trace::TraceLayer;

use handlers::{register, schedule};

// ─── Clock ────────────────────────────────────────────────────────────────────

/// Source of the reference date the weekly grid is laid out from.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
  /// The machine's local wall-clock time.
  System,
  /// Always the same instant.
  Fixed(NaiveDateTime),
}

impl Clock {
  pub fn now(&self) -> NaiveDateTime {
    match self {
      Clock::System => Local::now().naive_local(),
      Clock::Fixed(at) => *at,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ClinicStore> {
  pub store: Arc<S>,
  pub grid:  SlotGrid,
  pub clock: Clock,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the clinic.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ClinicStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/",         get(register::show_form).post(register::submit::<S>))
    .route("/schedule", get(schedule::list::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
