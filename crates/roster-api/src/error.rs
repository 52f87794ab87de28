//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::validate::FieldError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Duplicate-key conflicts map to 400 and validation failures to 422,
/// mirroring the status codes the original service produced.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("validation failed")]
  Validation(Vec<FieldError>),
}

impl From<roster_core::Error> for ApiError {
  fn from(e: roster_core::Error) -> Self {
    use roster_core::Error;
    match e {
      Error::PersonNotFound(_)
      | Error::AddressNotFound(_)
      | Error::FoodNotFound(_)
      | Error::PetNotFound(_) => ApiError::NotFound(e.to_string()),
      Error::DuplicateAddress(_) | Error::DuplicateFood(_) => {
        ApiError::Conflict(e.to_string())
      }
      Error::Invalid(fields) => ApiError::Validation(fields),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Conflict(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Validation(fields) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": "validation failed", "fields": fields })),
      )
        .into_response(),
    }
  }
}
