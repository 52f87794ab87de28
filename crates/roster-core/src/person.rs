//! Person — a UUID-keyed record with embedded addresses.
//!
//! The id is server-generated at creation and immutable afterwards. The
//! embedded address list carries full [`Address`] read shapes; the list
//! filters (`city`, `country`) match against any embedded address.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  address::Address,
  filter::{eq, eq_opt},
  patch::Patch,
  validate::{FieldError, finish, require_non_empty},
};

// ─── Read shape ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:         Uuid,
  pub uni:        String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub birth_date: Option<NaiveDate>,
  #[serde(default)]
  pub addresses:  Vec<Address>,
}

impl Person {
  pub fn validate(&self) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    require_non_empty(&self.uni, "uni", &mut errors);
    require_non_empty(&self.first_name, "first_name", &mut errors);
    require_non_empty(&self.last_name, "last_name", &mut errors);
    require_non_empty(&self.email, "email", &mut errors);
    if !self.email.trim().is_empty() && !self.email.contains('@') {
      errors.push(FieldError::new("email", "must contain '@'"));
    }
    for (i, address) in self.addresses.iter().enumerate() {
      if let Err(nested) = address.validate() {
        for e in nested {
          errors.push(FieldError::new(
            format!("addresses[{i}].{}", e.field),
            e.message,
          ));
        }
      }
    }
    finish(errors)
  }
}

// ─── Create shape ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PersonCreate {
  pub uni:        String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  #[serde(default)]
  pub phone:      Option<String>,
  #[serde(default)]
  pub birth_date: Option<NaiveDate>,
  #[serde(default)]
  pub addresses:  Vec<Address>,
}

impl PersonCreate {
  /// Build the read shape with the server-assigned id.
  pub fn into_person(self, id: Uuid) -> Person {
    Person {
      id,
      uni:        self.uni,
      first_name: self.first_name,
      last_name:  self.last_name,
      email:      self.email,
      phone:      self.phone,
      birth_date: self.birth_date,
      addresses:  self.addresses,
    }
  }
}

// ─── Update shape ────────────────────────────────────────────────────────────

/// Partial update. The id is not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonUpdate {
  #[serde(default)]
  pub uni:        Patch<String>,
  #[serde(default)]
  pub first_name: Patch<String>,
  #[serde(default)]
  pub last_name:  Patch<String>,
  #[serde(default)]
  pub email:      Patch<String>,
  #[serde(default)]
  pub phone:      Patch<String>,
  #[serde(default)]
  pub birth_date: Patch<NaiveDate>,
  #[serde(default)]
  pub addresses:  Patch<Vec<Address>>,
}

impl PersonUpdate {
  /// Merge present fields into `person`, field by field.
  pub fn apply(self, person: &mut Person) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    self.uni.merge(&mut person.uni, "uni", &mut errors);
    self
      .first_name
      .merge(&mut person.first_name, "first_name", &mut errors);
    self
      .last_name
      .merge(&mut person.last_name, "last_name", &mut errors);
    self.email.merge(&mut person.email, "email", &mut errors);
    self.phone.merge_opt(&mut person.phone);
    self.birth_date.merge_opt(&mut person.birth_date);
    self
      .addresses
      .merge(&mut person.addresses, "addresses", &mut errors);
    finish(errors)
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Exact-match filters for `GET /persons`. `city` and `country` match any
/// embedded address.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonFilter {
  pub uni:        Option<String>,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub birth_date: Option<NaiveDate>,
  pub city:       Option<String>,
  pub country:    Option<String>,
}

impl PersonFilter {
  pub fn matches(&self, person: &Person) -> bool {
    eq(&self.uni, &person.uni)
      && eq(&self.first_name, &person.first_name)
      && eq(&self.last_name, &person.last_name)
      && eq(&self.email, &person.email)
      && eq_opt(&self.phone, person.phone.as_deref())
      && self
        .birth_date
        .is_none_or(|date| person.birth_date == Some(date))
      && self.city.as_deref().is_none_or(|city| {
        person.addresses.iter().any(|a| a.city == city)
      })
      && self.country.as_deref().is_none_or(|country| {
        person.addresses.iter().any(|a| a.country == country)
      })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
