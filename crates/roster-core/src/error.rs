//! Error types for `roster-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::validate::FieldError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("person not found: {0}")]
  PersonNotFound(Uuid),

  #[error("address not found: {0}")]
  AddressNotFound(Uuid),

  #[error("food not found: {0}")]
  FoodNotFound(String),

  #[error("pet not found: {0}")]
  PetNotFound(Uuid),

  #[error("address with id {0} already exists")]
  DuplicateAddress(Uuid),

  #[error("food with nameID {0:?} already exists")]
  DuplicateFood(String),

  #[error("validation failed on {} field(s)", .0.len())]
  Invalid(Vec<FieldError>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
