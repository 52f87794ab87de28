//! In-memory backend for the Roster store.
//!
//! One `RwLock`-guarded ordered map per resource. Every operation takes its
//! table's lock exactly once and completes inside it, which is what makes
//! each create/update/delete atomic with respect to that table. Listing
//! iterates in key order, so the order is stable for a given store state.

mod store;

pub use store::MemoryStore;
