//! Handlers for `/persons` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `POST`  | `/persons` | Body: [`PersonCreate`]; id is server-generated |
//! | `GET`   | `/persons` | Filters: `uni`, `first_name`, `last_name`, `email`, `phone`, `birth_date`, `city`, `country` |
//! | `GET`   | `/persons/:id` | 404 if not found |
//! | `PATCH` | `/persons/:id` | Partial update; only present fields change |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  person::{Person, PersonCreate, PersonFilter, PersonUpdate},
  store::RosterStore,
};
use uuid::Uuid;

use crate::error::ApiError;

/// `POST /persons` — returns 201 + the stored [`Person`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<PersonCreate>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RosterStore,
{
  let person = store.create_person(body).await?;
  Ok((StatusCode::CREATED, Json(person)))
}

/// `GET /persons[?uni=...][&city=...]...` — all filters AND together.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(filter): Query<PersonFilter>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: RosterStore,
{
  let mut persons = store.list_persons().await?;
  persons.retain(|p| filter.matches(p));
  Ok(Json(persons))
}

/// `GET /persons/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Person>, ApiError>
where
  S: RosterStore,
{
  let person = store
    .get_person(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  Ok(Json(person))
}

/// `PATCH /persons/:id` — body: [`PersonUpdate`] with only-present fields.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<PersonUpdate>,
) -> Result<Json<Person>, ApiError>
where
  S: RosterStore,
{
  let person = store.update_person(id, body).await?;
  Ok(Json(person))
}
