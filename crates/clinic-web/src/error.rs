//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::{handlers::register::RegistrationForm, views};

#[derive(Debug, Error)]
pub enum Error {
  /// The registration form failed validation; it is shown again with
  /// `message` and the values the user entered.
  #[error("bad request: {message}")]
  BadRequest {
    form:    RegistrationForm,
    message: &'static str,
  },

  #[error(transparent)]
  Core(#[from] clinic_core::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::BadRequest { form, message } => {
        tracing::debug!(reason = message, "registration form rejected");
        let page = views::register_page(&form, Some(message));
        (StatusCode::BAD_REQUEST, Html(page)).into_response()
      }
      Error::Core(clinic_core::Error::NoAvailableSlot { matricule }) => {
        tracing::warn!(%matricule, "no appointment slot left in the grid");
        let page = views::error_page(
          "No appointment available",
          &format!(
            "Patient {matricule} was registered, but every slot of this \
             week's schedule is already booked."
          ),
        );
        (StatusCode::CONFLICT, Html(page)).into_response()
      }
      Error::Core(e) => {
        tracing::error!(error = %e, "registration failed");
        let page = views::error_page("Server error", &e.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use axum::body::to_bytes;
  use clinic_core::patient::Matricule;

  use super::*;

  async fn render(err: Error) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
  }

  #[tokio::test]
  async fn bad_request_rerenders_the_form() {
    let form = RegistrationForm {
      name:    "Alice".into(),
      phone:   String::new(),
      address: "1 Main St".into(),
    };
    let (status, body) = render(Error::BadRequest {
      form,
      message: "Phone is required.",
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Phone is required."), "{body}");
    assert!(body.contains("value=\"Alice\""), "{body}");
  }

  #[tokio::test]
  async fn exhausted_grid_is_a_conflict() {
    let (status, body) = render(Error::Core(clinic_core::Error::NoAvailableSlot {
      matricule: Matricule::new(21),
    }))
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("PAT-0021"), "{body}");
  }

  #[tokio::test]
  async fn other_core_errors_are_server_errors() {
    let (status, _) = render(Error::Core(clinic_core::Error::MalformedMatricule(
      "LEGACY-7".into(),
    )))
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  }
}
