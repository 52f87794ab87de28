//! The `RosterStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-memory`).
//! The API layer depends on this abstraction, not on any concrete backend.
//!
//! Semantics every backend must uphold:
//! - each method is atomic with respect to its resource table: no lost
//!   update, no duplicate key, no partially-written entity is ever visible;
//! - `update_*` merges the payload into the stored entity field by field and
//!   re-validates the merged record before committing;
//! - `update_food` with a changed `nameID` is a move: the old key is removed
//!   and the merged record is inserted under the new key, or the whole
//!   operation fails with [`Error::DuplicateFood`](crate::Error) and changes
//!   nothing;
//! - `list_*` returns every stored entity in a stable order for a given
//!   store state. Filtering is the API layer's job.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use uuid::Uuid;

use crate::{
  Result,
  address::{Address, AddressCreate, AddressUpdate},
  food::{Food, FoodCreate, FoodSummary, FoodUpdate},
  person::{Person, PersonCreate, PersonUpdate},
  pet::{Pet, PetCreate, PetUpdate},
};

pub trait RosterStore: Send + Sync {
  // ── Persons ───────────────────────────────────────────────────────────

  /// Validate `input`, assign a fresh id, and insert the person.
  fn create_person(
    &self,
    input: PersonCreate,
  ) -> impl Future<Output = Result<Person>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get_person(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>>> + Send + '_;

  /// List all persons.
  fn list_persons(&self)
  -> impl Future<Output = Result<Vec<Person>>> + Send + '_;

  /// Merge `update` into the stored person and return the result.
  fn update_person(
    &self,
    id: Uuid,
    update: PersonUpdate,
  ) -> impl Future<Output = Result<Person>> + Send + '_;

  // ── Addresses ─────────────────────────────────────────────────────────

  /// Validate `input` and insert it under its client-supplied id.
  /// Fails with [`Error::DuplicateAddress`](crate::Error) if the id is taken.
  fn create_address(
    &self,
    input: AddressCreate,
  ) -> impl Future<Output = Result<Address>> + Send + '_;

  /// Retrieve an address by id. Returns `None` if not found.
  fn get_address(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Address>>> + Send + '_;

  /// List all addresses.
  fn list_addresses(
    &self,
  ) -> impl Future<Output = Result<Vec<Address>>> + Send + '_;

  /// Merge `update` into the stored address and return the result.
  fn update_address(
    &self,
    id: Uuid,
    update: AddressUpdate,
  ) -> impl Future<Output = Result<Address>> + Send + '_;

  // ── Foods ─────────────────────────────────────────────────────────────

  /// Validate `input`, stamp creation timestamps, and insert it under its
  /// `nameID`. Fails with [`Error::DuplicateFood`](crate::Error) if taken.
  fn create_food(
    &self,
    input: FoodCreate,
  ) -> impl Future<Output = Result<Food>> + Send + '_;

  /// Retrieve a food by `nameID`. Returns `None` if not found.
  fn get_food(
    &self,
    id: String,
  ) -> impl Future<Output = Result<Option<Food>>> + Send + '_;

  /// List all foods.
  fn list_foods(&self) -> impl Future<Output = Result<Vec<Food>>> + Send + '_;

  /// Merge `update` into the stored food. A changed `nameID` moves the entry
  /// atomically; a move onto an existing entry fails and changes nothing.
  fn update_food(
    &self,
    id: String,
    update: FoodUpdate,
  ) -> impl Future<Output = Result<Food>> + Send + '_;

  /// Remove a food and return a summary of the deleted record.
  fn delete_food(
    &self,
    id: String,
  ) -> impl Future<Output = Result<FoodSummary>> + Send + '_;

  // ── Pets ──────────────────────────────────────────────────────────────

  /// Validate `input`, assign a fresh id and timestamps, and insert the pet.
  fn create_pet(
    &self,
    input: PetCreate,
  ) -> impl Future<Output = Result<Pet>> + Send + '_;

  /// Retrieve a pet by id. Returns `None` if not found.
  fn get_pet(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Pet>>> + Send + '_;

  /// List all pets.
  fn list_pets(&self) -> impl Future<Output = Result<Vec<Pet>>> + Send + '_;

  /// Merge `update` into the stored pet and return the result.
  fn update_pet(
    &self,
    id: Uuid,
    update: PetUpdate,
  ) -> impl Future<Output = Result<Pet>> + Send + '_;
}
