//! Handlers for `/foods` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/foods` | Body: [`FoodCreate`]; 400 if the nameID is taken |
//! | `GET`    | `/foods` | Filters: `category`, `min_calories`, `max_calories` |
//! | `GET`    | `/foods/:id` | 404 if not found |
//! | `PATCH`  | `/foods/:id` | Partial update; a present `nameID` renames (moves) the entry |
//! | `DELETE` | `/foods/:id` | Returns a [`FoodSummary`] of the deleted record |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  food::{Food, FoodCreate, FoodFilter, FoodSummary, FoodUpdate},
  store::RosterStore,
};

use crate::error::ApiError;

/// `POST /foods` — returns 201 + the stored [`Food`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<FoodCreate>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RosterStore,
{
  let food = store.create_food(body).await?;
  Ok((StatusCode::CREATED, Json(food)))
}

/// `GET /foods[?category=...][&min_calories=...][&max_calories=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(filter): Query<FoodFilter>,
) -> Result<Json<Vec<Food>>, ApiError>
where
  S: RosterStore,
{
  let mut foods = store.list_foods().await?;
  foods.retain(|f| filter.matches(f));
  Ok(Json(foods))
}

/// `GET /foods/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Food>, ApiError>
where
  S: RosterStore,
{
  let food = store
    .get_food(id.clone())
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("food {id:?} not found")))?;
  Ok(Json(food))
}

/// `PATCH /foods/:id` — body: [`FoodUpdate`] with only-present fields.
/// Renaming onto an existing entry returns 400 and changes nothing.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(body): Json<FoodUpdate>,
) -> Result<Json<Food>, ApiError>
where
  S: RosterStore,
{
  let food = store.update_food(id, body).await?;
  Ok(Json(food))
}

/// `DELETE /foods/:id` — returns 200 + the deleted record's summary.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<FoodSummary>, ApiError>
where
  S: RosterStore,
{
  let summary = store.delete_food(id).await?;
  Ok(Json(summary))
}
