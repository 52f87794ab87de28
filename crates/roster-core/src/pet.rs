//! Pet — a UUID-keyed record with server-assigned timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  filter::eq,
  patch::Patch,
  validate::{FieldError, finish, require_non_empty},
};

// ─── Species ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetSpecies {
  Dog,
  Cat,
  Bird,
  Fish,
}

// ─── Read shape ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
  pub id:         Uuid,
  pub species:    PetSpecies,
  pub name:       String,
  pub age:        Option<u32>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Pet {
  pub fn validate(&self) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    require_non_empty(&self.name, "name", &mut errors);
    finish(errors)
  }
}

// ─── Create shape ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PetCreate {
  pub species: PetSpecies,
  pub name:    String,
  #[serde(default)]
  pub age:     Option<u32>,
}

impl PetCreate {
  /// Build the read shape with the server-assigned id and timestamps.
  pub fn into_pet(self, id: Uuid, now: DateTime<Utc>) -> Pet {
    Pet {
      id,
      species:    self.species,
      name:       self.name,
      age:        self.age,
      created_at: now,
      updated_at: now,
    }
  }
}

// ─── Update shape ────────────────────────────────────────────────────────────

/// Partial update. The id is not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetUpdate {
  #[serde(default)]
  pub species: Patch<PetSpecies>,
  #[serde(default)]
  pub name:    Patch<String>,
  #[serde(default)]
  pub age:     Patch<u32>,
}

impl PetUpdate {
  /// Merge present fields into `pet`, field by field.
  pub fn apply(self, pet: &mut Pet) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    self.species.merge(&mut pet.species, "species", &mut errors);
    self.name.merge(&mut pet.name, "name", &mut errors);
    self.age.merge_opt(&mut pet.age);
    finish(errors)
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Filters for `GET /pets`. The age bounds exclude pets of unknown age.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetFilter {
  pub species: Option<PetSpecies>,
  pub name:    Option<String>,
  pub min_age: Option<u32>,
  pub max_age: Option<u32>,
}

impl PetFilter {
  pub fn matches(&self, pet: &Pet) -> bool {
    self.species.is_none_or(|s| pet.species == s)
      && eq(&self.name, &pet.name)
      && self.min_age.is_none_or(|min| pet.age.is_some_and(|a| a >= min))
      && self.max_age.is_none_or(|max| pet.age.is_some_and(|a| a <= max))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
