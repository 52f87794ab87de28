//! Health — an ephemeral response value, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liveness response: a snapshot of the current time and the host's network
/// identity, echoing back the optional inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
  pub status:         u16,
  pub status_message: String,
  pub timestamp:      DateTime<Utc>,
  pub ip_address:     String,
  pub echo:           Option<String>,
  pub path_echo:      Option<String>,
}

impl Health {
  pub fn new(
    now: DateTime<Utc>,
    ip_address: String,
    echo: Option<String>,
    path_echo: Option<String>,
  ) -> Self {
    Self {
      status: 200,
      status_message: "OK".to_string(),
      timestamp: now,
      ip_address,
      echo,
      path_echo,
    }
  }
}
