//! Handlers for `/health` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/health` | Optional `?echo=<string>` |
//! | `GET`  | `/health/:path_echo` | Required path echo, optional `?echo=` |

use axum::{
  Json,
  extract::{Path, Query},
};
use chrono::Utc;
use roster_core::health::Health;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EchoParams {
  pub echo: Option<String>,
}

/// `GET /health[?echo=...]`
pub async fn plain(Query(params): Query<EchoParams>) -> Json<Health> {
  Json(Health::new(Utc::now(), host_ip(), params.echo, None))
}

/// `GET /health/:path_echo[?echo=...]`
pub async fn with_path(
  Path(path_echo): Path<String>,
  Query(params): Query<EchoParams>,
) -> Json<Health> {
  Json(Health::new(
    Utc::now(),
    host_ip(),
    params.echo,
    Some(path_echo),
  ))
}

/// Best-effort local IP: the address the OS would route an outbound packet
/// from. No packet is actually sent. Falls back to loopback.
fn host_ip() -> String {
  std::net::UdpSocket::bind("0.0.0.0:0")
    .and_then(|socket| {
      socket.connect("8.8.8.8:80")?;
      socket.local_addr()
    })
    .map(|addr| addr.ip().to_string())
    .unwrap_or_else(|_| "127.0.0.1".to_string())
}
