//! [`Patch`] — the tri-state field carrier for partial updates.
//!
//! A PATCH body distinguishes three intents per field: the key is absent
//! (leave the stored value alone), the key is `null` (clear an optional
//! field), or the key carries a value (overwrite). `Option<T>` collapses the
//! first two, so Update shapes use `Patch<T>` instead.

use serde::{Deserialize, Deserializer};

use crate::validate::FieldError;

/// One field of an Update shape.
///
/// Deserialises from JSON with `#[serde(default)]` on the field: a missing
/// key stays [`Patch::Absent`], an explicit `null` becomes [`Patch::Null`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
  /// Key not present in the payload; keep the stored value.
  #[default]
  Absent,
  /// Key present as explicit `null`.
  Null,
  /// Key present with a value.
  Value(T),
}

impl<T> Patch<T> {
  pub fn is_absent(&self) -> bool {
    matches!(self, Patch::Absent)
  }

  /// Merge into a required field. `Null` is a field error — required fields
  /// cannot be cleared.
  pub fn merge(self, slot: &mut T, field: &str, errors: &mut Vec<FieldError>) {
    match self {
      Patch::Absent => {}
      Patch::Null => {
        errors.push(FieldError::new(field, "may not be null"));
      }
      Patch::Value(value) => *slot = value,
    }
  }

  /// Merge into an optional field. `Null` clears it.
  pub fn merge_opt(self, slot: &mut Option<T>) {
    match self {
      Patch::Absent => {}
      Patch::Null => *slot = None,
      Patch::Value(value) => *slot = Some(value),
    }
  }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Option::<T>::deserialize(deserializer).map(|value| match value {
      Some(v) => Patch::Value(v),
      None => Patch::Null,
    })
  }
}
