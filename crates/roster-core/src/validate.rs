//! Field-level validation support.
//!
//! Type and enum violations are caught by serde at the request boundary;
//! this layer covers the semantic rules serde cannot express (non-empty
//! strings, email shape). Validation runs on full Read shapes, immediately
//! before a store table is mutated.

use serde::{Deserialize, Serialize};

/// A single failed field, reported back to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field:   String,
  pub message: String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field:   field.into(),
      message: message.into(),
    }
  }
}

/// Push an error if `value` is empty or whitespace-only.
pub(crate) fn require_non_empty(
  value: &str,
  field: &str,
  errors: &mut Vec<FieldError>,
) {
  if value.trim().is_empty() {
    errors.push(FieldError::new(field, "must not be empty"));
  }
}

/// Collapse a list of field errors into a `Result`.
pub(crate) fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
  if errors.is_empty() { Ok(()) } else { Err(errors) }
}
