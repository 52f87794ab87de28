//! [`MemoryStore`] — the in-memory implementation of [`RosterStore`].

use std::{
  collections::BTreeMap,
  sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use uuid::Uuid;

use roster_core::{
  Error, Result,
  address::{Address, AddressCreate, AddressUpdate},
  food::{Food, FoodCreate, FoodSummary, FoodUpdate},
  person::{Person, PersonCreate, PersonUpdate},
  pet::{Pet, PetCreate, PetUpdate},
  provider::{Clock, IdSource, RandomIds, SystemClock},
  store::RosterStore,
};

// ─── Lock helpers ────────────────────────────────────────────────────────────

// Poisoning only happens if another request panicked mid-operation; the maps
// never hold partially-written entities, so the data is still usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
  lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
  lock.write().unwrap_or_else(PoisonError::into_inner)
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Process-local storage: one ordered table per resource, one lock per table.
///
/// Construct once at process start and share behind an [`Arc`](std::sync::Arc).
pub struct MemoryStore {
  ids:       Box<dyn IdSource>,
  clock:     Box<dyn Clock>,
  persons:   RwLock<BTreeMap<Uuid, Person>>,
  addresses: RwLock<BTreeMap<Uuid, Address>>,
  foods:     RwLock<BTreeMap<String, Food>>,
  pets:      RwLock<BTreeMap<Uuid, Pet>>,
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

impl MemoryStore {
  /// An empty store with random ids and the system clock.
  pub fn new() -> Self {
    Self::with_providers(Box::new(RandomIds), Box::new(SystemClock))
  }

  /// An empty store with injected id/clock providers — useful for testing
  /// with deterministic values.
  pub fn with_providers(
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
  ) -> Self {
    Self {
      ids,
      clock,
      persons: RwLock::new(BTreeMap::new()),
      addresses: RwLock::new(BTreeMap::new()),
      foods: RwLock::new(BTreeMap::new()),
      pets: RwLock::new(BTreeMap::new()),
    }
  }
}

impl RosterStore for MemoryStore {
  // ── Persons ───────────────────────────────────────────────────────────

  async fn create_person(&self, input: PersonCreate) -> Result<Person> {
    let person = input.into_person(self.ids.next_id());
    person.validate().map_err(Error::Invalid)?;

    let mut persons = write(&self.persons);
    persons.insert(person.id, person.clone());
    Ok(person)
  }

  async fn get_person(&self, id: Uuid) -> Result<Option<Person>> {
    Ok(read(&self.persons).get(&id).cloned())
  }

  async fn list_persons(&self) -> Result<Vec<Person>> {
    Ok(read(&self.persons).values().cloned().collect())
  }

  async fn update_person(
    &self,
    id: Uuid,
    update: PersonUpdate,
  ) -> Result<Person> {
    let mut persons = write(&self.persons);
    let stored = persons.get(&id).ok_or(Error::PersonNotFound(id))?;

    let mut merged = stored.clone();
    update.apply(&mut merged).map_err(Error::Invalid)?;
    merged.validate().map_err(Error::Invalid)?;

    persons.insert(id, merged.clone());
    Ok(merged)
  }

  // ── Addresses ─────────────────────────────────────────────────────────

  async fn create_address(&self, input: AddressCreate) -> Result<Address> {
    let address = input.into_address();
    address.validate().map_err(Error::Invalid)?;

    let mut addresses = write(&self.addresses);
    if addresses.contains_key(&address.id) {
      return Err(Error::DuplicateAddress(address.id));
    }
    addresses.insert(address.id, address.clone());
    Ok(address)
  }

  async fn get_address(&self, id: Uuid) -> Result<Option<Address>> {
    Ok(read(&self.addresses).get(&id).cloned())
  }

  async fn list_addresses(&self) -> Result<Vec<Address>> {
    Ok(read(&self.addresses).values().cloned().collect())
  }

  async fn update_address(
    &self,
    id: Uuid,
    update: AddressUpdate,
  ) -> Result<Address> {
    let mut addresses = write(&self.addresses);
    let stored = addresses.get(&id).ok_or(Error::AddressNotFound(id))?;

    let mut merged = stored.clone();
    update.apply(&mut merged).map_err(Error::Invalid)?;
    merged.validate().map_err(Error::Invalid)?;

    addresses.insert(id, merged.clone());
    Ok(merged)
  }

  // ── Foods ─────────────────────────────────────────────────────────────

  async fn create_food(&self, input: FoodCreate) -> Result<Food> {
    let food = input.into_food(self.clock.now());
    food.validate().map_err(Error::Invalid)?;

    let mut foods = write(&self.foods);
    if foods.contains_key(&food.name_id) {
      return Err(Error::DuplicateFood(food.name_id));
    }
    foods.insert(food.name_id.clone(), food.clone());
    Ok(food)
  }

  async fn get_food(&self, id: String) -> Result<Option<Food>> {
    Ok(read(&self.foods).get(&id).cloned())
  }

  async fn list_foods(&self) -> Result<Vec<Food>> {
    Ok(read(&self.foods).values().cloned().collect())
  }

  async fn update_food(&self, id: String, update: FoodUpdate) -> Result<Food> {
    let mut foods = write(&self.foods);
    let stored = foods.get(&id).ok_or_else(|| Error::FoodNotFound(id.clone()))?;

    let mut merged = stored.clone();
    update.apply(&mut merged).map_err(Error::Invalid)?;
    merged.validate().map_err(Error::Invalid)?;

    // A changed nameID is a move; refuse to clobber a different entry. The
    // whole check-remove-insert sequence runs under the table's write lock.
    if merged.name_id != id {
      if foods.contains_key(&merged.name_id) {
        return Err(Error::DuplicateFood(merged.name_id));
      }
      foods.remove(&id);
    }
    foods.insert(merged.name_id.clone(), merged.clone());
    Ok(merged)
  }

  async fn delete_food(&self, id: String) -> Result<FoodSummary> {
    let mut foods = write(&self.foods);
    let food = foods.remove(&id).ok_or(Error::FoodNotFound(id))?;
    Ok(FoodSummary::from(food))
  }

  // ── Pets ──────────────────────────────────────────────────────────────

  async fn create_pet(&self, input: PetCreate) -> Result<Pet> {
    let pet = input.into_pet(self.ids.next_id(), self.clock.now());
    pet.validate().map_err(Error::Invalid)?;

    let mut pets = write(&self.pets);
    pets.insert(pet.id, pet.clone());
    Ok(pet)
  }

  async fn get_pet(&self, id: Uuid) -> Result<Option<Pet>> {
    Ok(read(&self.pets).get(&id).cloned())
  }

  async fn list_pets(&self) -> Result<Vec<Pet>> {
    Ok(read(&self.pets).values().cloned().collect())
  }

  async fn update_pet(&self, id: Uuid, update: PetUpdate) -> Result<Pet> {
    let mut pets = write(&self.pets);
    let stored = pets.get(&id).ok_or(Error::PetNotFound(id))?;

    let mut merged = stored.clone();
    update.apply(&mut merged).map_err(Error::Invalid)?;
    merged.validate().map_err(Error::Invalid)?;

    pets.insert(id, merged.clone());
    Ok(merged)
  }
}
