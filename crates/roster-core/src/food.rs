//! Food — a string-keyed record where the key itself is updatable.
//!
//! `nameID` is the primary key. A partial update may change it; the store
//! treats that as an atomic move (old key removed, merged record inserted
//! under the new key) and rejects moves onto an existing entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  patch::Patch,
  validate::{FieldError, finish, require_non_empty},
};

// ─── Category ────────────────────────────────────────────────────────────────

/// Serialised capitalised, exactly as the wire values (`"Fruits"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
  Fruits,
  Vegetables,
  Grains,
  Protein,
  Dairy,
}

// ─── Read shape ──────────────────────────────────────────────────────────────

/// Timestamps are set once at creation. A PATCH rewrites fields but leaves
/// both timestamps alone, so an empty update is a true no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
  #[serde(rename = "nameID")]
  pub name_id:    String,
  pub category:   FoodCategory,
  pub calories:   Option<u32>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Food {
  pub fn validate(&self) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    require_non_empty(&self.name_id, "nameID", &mut errors);
    finish(errors)
  }
}

// ─── Create shape ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct FoodCreate {
  #[serde(rename = "nameID")]
  pub name_id:  String,
  pub category: FoodCategory,
  #[serde(default)]
  pub calories: Option<u32>,
}

impl FoodCreate {
  /// Build the read shape with server-assigned timestamps.
  pub fn into_food(self, now: DateTime<Utc>) -> Food {
    Food {
      name_id:    self.name_id,
      category:   self.category,
      calories:   self.calories,
      created_at: now,
      updated_at: now,
    }
  }
}

// ─── Update shape ────────────────────────────────────────────────────────────

/// Partial update. A present `nameID` renames the entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodUpdate {
  #[serde(default, rename = "nameID")]
  pub name_id:  Patch<String>,
  #[serde(default)]
  pub category: Patch<FoodCategory>,
  #[serde(default)]
  pub calories: Patch<u32>,
}

impl FoodUpdate {
  /// Merge present fields into `food`, field by field.
  pub fn apply(self, food: &mut Food) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    self.name_id.merge(&mut food.name_id, "nameID", &mut errors);
    self.category.merge(&mut food.category, "category", &mut errors);
    self.calories.merge_opt(&mut food.calories);
    finish(errors)
  }
}

// ─── Delete summary ──────────────────────────────────────────────────────────

/// Response shape for `DELETE /foods/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSummary {
  #[serde(rename = "nameID")]
  pub name_id:  String,
  pub category: FoodCategory,
  pub calories: Option<u32>,
}

impl From<Food> for FoodSummary {
  fn from(food: Food) -> Self {
    Self {
      name_id:  food.name_id,
      category: food.category,
      calories: food.calories,
    }
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Filters for `GET /foods`. The calorie bounds exclude entries without a
/// calorie count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodFilter {
  pub category:     Option<FoodCategory>,
  pub min_calories: Option<u32>,
  pub max_calories: Option<u32>,
}

impl FoodFilter {
  pub fn matches(&self, food: &Food) -> bool {
    self.category.is_none_or(|c| food.category == c)
      && self
        .min_calories
        .is_none_or(|min| food.calories.is_some_and(|c| c >= min))
      && self
        .max_calories
        .is_none_or(|max| food.calories.is_some_and(|c| c <= max))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
