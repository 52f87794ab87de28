//! Address — a UUID-keyed postal address.
//!
//! The id is client-supplied, unlike Person and Pet ids. Addresses also
//! appear embedded inside [`Person`](crate::person::Person); no referential
//! integrity is enforced between the embedded copies and the Address table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  filter::{eq, eq_opt},
  patch::Patch,
  validate::{FieldError, finish, require_non_empty},
};

// ─── Read shape ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub id:          Uuid,
  pub street:      String,
  pub city:        String,
  pub state:       Option<String>,
  pub postal_code: Option<String>,
  pub country:     String,
}

impl Address {
  pub fn validate(&self) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    require_non_empty(&self.street, "street", &mut errors);
    require_non_empty(&self.city, "city", &mut errors);
    require_non_empty(&self.country, "country", &mut errors);
    finish(errors)
  }
}

// ─── Create shape ────────────────────────────────────────────────────────────

/// Client-supplied fields for a new address. The id is part of the payload;
/// creation fails with a conflict if it is already taken.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressCreate {
  pub id:          Uuid,
  pub street:      String,
  pub city:        String,
  #[serde(default)]
  pub state:       Option<String>,
  #[serde(default)]
  pub postal_code: Option<String>,
  pub country:     String,
}

impl AddressCreate {
  pub fn into_address(self) -> Address {
    Address {
      id:          self.id,
      street:      self.street,
      city:        self.city,
      state:       self.state,
      postal_code: self.postal_code,
      country:     self.country,
    }
  }
}

// ─── Update shape ────────────────────────────────────────────────────────────

/// Partial update. The id is not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressUpdate {
  #[serde(default)]
  pub street:      Patch<String>,
  #[serde(default)]
  pub city:        Patch<String>,
  #[serde(default)]
  pub state:       Patch<String>,
  #[serde(default)]
  pub postal_code: Patch<String>,
  #[serde(default)]
  pub country:     Patch<String>,
}

impl AddressUpdate {
  /// Merge present fields into `address`, field by field.
  pub fn apply(self, address: &mut Address) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    self.street.merge(&mut address.street, "street", &mut errors);
    self.city.merge(&mut address.city, "city", &mut errors);
    self.state.merge_opt(&mut address.state);
    self.postal_code.merge_opt(&mut address.postal_code);
    self.country.merge(&mut address.country, "country", &mut errors);
    finish(errors)
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Exact-match filters for `GET /addresses`, straight from the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressFilter {
  pub street:      Option<String>,
  pub city:        Option<String>,
  pub state:       Option<String>,
  pub postal_code: Option<String>,
  pub country:     Option<String>,
}

impl AddressFilter {
  pub fn matches(&self, address: &Address) -> bool {
    eq(&self.street, &address.street)
      && eq(&self.city, &address.city)
      && eq_opt(&self.state, address.state.as_deref())
      && eq_opt(&self.postal_code, address.postal_code.as_deref())
      && eq(&self.country, &address.country)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Address {
    Address {
      id:          Uuid::new_v4(),
      street:      "116th and Broadway".to_string(),
      city:        "New York".to_string(),
      state:       Some("NY".to_string()),
      postal_code: Some("10027".to_string()),
      country:     "USA".to_string(),
    }
  }

  #[test]
  fn update_overwrites_only_present_fields() {
    let mut address = sample();
    let update: AddressUpdate =
      serde_json::from_str(r#"{"city":"Boston","state":null}"#).unwrap();
    update.apply(&mut address).unwrap();

    assert_eq!(address.city, "Boston");
    assert_eq!(address.state, None);
    assert_eq!(address.street, "116th and Broadway");
    assert_eq!(address.country, "USA");
  }

  #[test]
  fn empty_update_changes_nothing() {
    let mut address = sample();
    let before = address.clone();
    let update: AddressUpdate = serde_json::from_str("{}").unwrap();
    update.apply(&mut address).unwrap();
    assert_eq!(address, before);
  }

  #[test]
  fn null_on_required_field_is_rejected() {
    let mut address = sample();
    let update: AddressUpdate =
      serde_json::from_str(r#"{"country":null}"#).unwrap();
    let errors = update.apply(&mut address).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "country");
  }

  #[test]
  fn filter_is_logical_and() {
    let address = sample();

    let all = AddressFilter::default();
    assert!(all.matches(&address));

    let city = AddressFilter {
      city: Some("New York".to_string()),
      ..Default::default()
    };
    assert!(city.matches(&address));

    let both = AddressFilter {
      city: Some("New York".to_string()),
      country: Some("Canada".to_string()),
      ..Default::default()
    };
    assert!(!both.matches(&address));
  }

  #[test]
  fn filter_on_unset_optional_field_never_matches() {
    let mut address = sample();
    address.postal_code = None;
    let filter = AddressFilter {
      postal_code: Some("10027".to_string()),
      ..Default::default()
    };
    assert!(!filter.matches(&address));
  }
}
