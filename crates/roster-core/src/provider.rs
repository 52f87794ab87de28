//! Id and clock providers.
//!
//! Server-generated identifiers and timestamps come from these two seams so
//! store tests can inject deterministic values instead of asserting around
//! `Uuid::new_v4()` and `Utc::now()`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of server-generated entity ids.
pub trait IdSource: Send + Sync {
  fn next_id(&self) -> Uuid;
}

/// Source of server-generated timestamps.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Default [`IdSource`]: random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
  fn next_id(&self) -> Uuid {
    Uuid::new_v4()
  }
}

/// Default [`Clock`]: the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}
