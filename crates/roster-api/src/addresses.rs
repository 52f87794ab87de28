//! Handlers for `/addresses` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `POST`  | `/addresses` | Body: [`AddressCreate`] with a client-supplied id; 400 if taken |
//! | `GET`   | `/addresses` | Filters: `street`, `city`, `state`, `postal_code`, `country` |
//! | `GET`   | `/addresses/:id` | 404 if not found |
//! | `PATCH` | `/addresses/:id` | Partial update; the id itself is immutable |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  address::{Address, AddressCreate, AddressFilter, AddressUpdate},
  store::RosterStore,
};
use uuid::Uuid;

use crate::error::ApiError;

/// `POST /addresses` — returns 201 + the stored [`Address`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<AddressCreate>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RosterStore,
{
  let address = store.create_address(body).await?;
  Ok((StatusCode::CREATED, Json(address)))
}

/// `GET /addresses[?street=...][&city=...]...` — all filters AND together.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(filter): Query<AddressFilter>,
) -> Result<Json<Vec<Address>>, ApiError>
where
  S: RosterStore,
{
  let mut addresses = store.list_addresses().await?;
  addresses.retain(|a| filter.matches(a));
  Ok(Json(addresses))
}

/// `GET /addresses/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Address>, ApiError>
where
  S: RosterStore,
{
  let address = store
    .get_address(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("address {id} not found")))?;
  Ok(Json(address))
}

/// `PATCH /addresses/:id` — body: [`AddressUpdate`] with only-present fields.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<AddressUpdate>,
) -> Result<Json<Address>, ApiError>
where
  S: RosterStore,
{
  let address = store.update_address(id, body).await?;
  Ok(Json(address))
}
