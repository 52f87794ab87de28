//! Handlers for `/pets` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `POST`  | `/pets` | Body: [`PetCreate`]; id and timestamps are server-generated |
//! | `GET`   | `/pets` | Filters: `species`, `name`, `min_age`, `max_age` |
//! | `GET`   | `/pets/:id` | 404 if not found |
//! | `PATCH` | `/pets/:id` | Partial update; only present fields change |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  pet::{Pet, PetCreate, PetFilter, PetUpdate},
  store::RosterStore,
};
use uuid::Uuid;

use crate::error::ApiError;

/// `POST /pets` — returns 201 + the stored [`Pet`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<PetCreate>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RosterStore,
{
  let pet = store.create_pet(body).await?;
  Ok((StatusCode::CREATED, Json(pet)))
}

/// `GET /pets[?species=...][&name=...][&min_age=...][&max_age=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(filter): Query<PetFilter>,
) -> Result<Json<Vec<Pet>>, ApiError>
where
  S: RosterStore,
{
  let mut pets = store.list_pets().await?;
  pets.retain(|p| filter.matches(p));
  Ok(Json(pets))
}

/// `GET /pets/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Pet>, ApiError>
where
  S: RosterStore,
{
  let pet = store
    .get_pet(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("pet {id} not found")))?;
  Ok(Json(pet))
}

/// `PATCH /pets/:id` — body: [`PetUpdate`] with only-present fields.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<PetUpdate>,
) -> Result<Json<Pet>, ApiError>
where
  S: RosterStore,
{
  let pet = store.update_pet(id, body).await?;
  Ok(Json(pet))
}
