//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::store::RosterStore`]. Transport concerns (port binding,
//! request tracing) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = roster_api::api_router(store.clone());
//! axum::serve(listener, app).await?;
//! ```

pub mod addresses;
pub mod error;
pub mod foods;
pub mod health;
pub mod persons;
pub mod pets;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use roster_core::store::RosterStore;
use serde_json::json;

pub use error::ApiError;

/// Build a fully-materialised router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RosterStore + 'static,
{
  Router::new()
    .route("/", get(root))
    // Health
    .route("/health", get(health::plain))
    .route("/health/{path_echo}", get(health::with_path))
    // Persons
    .route("/persons", get(persons::list::<S>).post(persons::create::<S>))
    .route(
      "/persons/{id}",
      get(persons::get_one::<S>).patch(persons::update_one::<S>),
    )
    // Addresses
    .route(
      "/addresses",
      get(addresses::list::<S>).post(addresses::create::<S>),
    )
    .route(
      "/addresses/{id}",
      get(addresses::get_one::<S>).patch(addresses::update_one::<S>),
    )
    // Foods
    .route("/foods", get(foods::list::<S>).post(foods::create::<S>))
    .route(
      "/foods/{id}",
      get(foods::get_one::<S>)
        .patch(foods::update_one::<S>)
        .delete(foods::delete_one::<S>),
    )
    // Pets
    .route("/pets", get(pets::list::<S>).post(pets::create::<S>))
    .route(
      "/pets/{id}",
      get(pets::get_one::<S>).patch(pets::update_one::<S>),
    )
    .with_state(store)
}

/// `GET /` — static welcome message.
async fn root() -> Json<serde_json::Value> {
  Json(json!({ "message": "Welcome to the Roster API." }))
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use roster_store_memory::MemoryStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  use super::*;

  fn app() -> Router<()> {
    api_router(Arc::new(MemoryStore::new()))
  }

  async fn send(
    app: &Router<()>,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
      Some(v) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(v.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      // Extractor rejections (e.g. unknown enum values) have plain-text
      // bodies; surface them as a JSON string instead of panicking.
      serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
      })
    };
    (status, value)
  }

  fn person_body(uni: &str) -> Value {
    json!({
      "uni": uni,
      "first_name": "Ada",
      "last_name": "Lovelace",
      "email": format!("{uni}@columbia.edu"),
      "addresses": [{
        "id": "11111111-1111-4111-8111-111111111111",
        "street": "116th and Broadway",
        "city": "New York",
        "state": "NY",
        "postal_code": "10027",
        "country": "USA"
      }]
    })
  }

  // ── Root & health ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn root_returns_welcome_message() {
    let (status, body) = send(&app(), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the Roster API.");
  }

  #[tokio::test]
  async fn health_echoes_query_and_path() {
    let app = app();

    let (status, body) = send(&app, "GET", "/health?echo=hi", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["status_message"], "OK");
    assert_eq!(body["echo"], "hi");
    assert_eq!(body["path_echo"], Value::Null);
    assert!(body["timestamp"].is_string());
    assert!(body["ip_address"].is_string());

    let (status, body) = send(&app, "GET", "/health/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["path_echo"], "ping");
    assert_eq!(body["echo"], Value::Null);
  }

  // ── Persons ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn person_create_then_get_round_trips() {
    let app = app();

    let (status, created) =
      send(&app, "POST", "/persons", Some(person_body("ab1234"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["uni"], "ab1234");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) =
      send(&app, "GET", &format!("/persons/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
  }

  #[tokio::test]
  async fn person_get_missing_returns_404() {
    let (status, body) = send(
      &app(),
      "GET",
      "/persons/99999999-9999-4999-8999-999999999999",
      None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
  }

  #[tokio::test]
  async fn person_patch_changes_only_present_fields() {
    let app = app();
    let (_, created) =
      send(&app, "POST", "/persons", Some(person_body("ab1234"))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
      &app,
      "PATCH",
      &format!("/persons/{id}"),
      Some(json!({ "first_name": "Augusta" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["first_name"], "Augusta");
    assert_eq!(updated["last_name"], "Lovelace");
    assert_eq!(updated["uni"], "ab1234");
    assert_eq!(updated["id"], created["id"]);
  }

  #[tokio::test]
  async fn person_patch_with_empty_body_changes_nothing() {
    let app = app();
    let (_, created) =
      send(&app, "POST", "/persons", Some(person_body("ab1234"))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) =
      send(&app, "PATCH", &format!("/persons/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, created);
  }

  #[tokio::test]
  async fn person_list_filters_by_nested_address_city() {
    let app = app();
    send(&app, "POST", "/persons", Some(person_body("ab1234"))).await;

    let mut remote = person_body("cd5678");
    remote["addresses"][0]["id"] = json!("22222222-2222-4222-8222-222222222222");
    remote["addresses"][0]["city"] = json!("Boston");
    send(&app, "POST", "/persons", Some(remote)).await;

    let (status, all) = send(&app, "GET", "/persons", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, ny) = send(&app, "GET", "/persons?city=New%20York", None).await;
    let ny = ny.as_array().unwrap();
    assert_eq!(ny.len(), 1);
    assert_eq!(ny[0]["uni"], "ab1234");

    // Two filters AND together.
    let (_, none) =
      send(&app, "GET", "/persons?city=Boston&uni=ab1234", None).await;
    assert!(none.as_array().unwrap().is_empty());
  }

  #[tokio::test]
  async fn person_create_with_bad_email_returns_422_with_field() {
    let mut body = person_body("ab1234");
    body["email"] = json!("not-an-email");
    let (status, response) = send(&app(), "POST", "/persons", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["fields"][0]["field"], "email");
  }

  // ── Addresses ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn address_duplicate_id_returns_400_and_keeps_original() {
    let app = app();
    let address = json!({
      "id": "33333333-3333-4333-8333-333333333333",
      "street": "116th and Broadway",
      "city": "New York",
      "country": "USA"
    });

    let (status, _) = send(&app, "POST", "/addresses", Some(address.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut dup = address.clone();
    dup["city"] = json!("Boston");
    let (status, body) = send(&app, "POST", "/addresses", Some(dup)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));

    let (_, stored) = send(
      &app,
      "GET",
      "/addresses/33333333-3333-4333-8333-333333333333",
      None,
    )
    .await;
    assert_eq!(stored["city"], "New York");
  }

  #[tokio::test]
  async fn address_list_filters_and_together() {
    let app = app();
    for (id, city, country) in [
      ("44444444-4444-4444-8444-444444444444", "New York", "USA"),
      ("55555555-5555-4555-8555-555555555555", "Toronto", "Canada"),
    ] {
      let (status, _) = send(
        &app,
        "POST",
        "/addresses",
        Some(json!({
          "id": id,
          "street": "Main St",
          "city": city,
          "country": country
        })),
      )
      .await;
      assert_eq!(status, StatusCode::CREATED);
    }

    let (_, usa) = send(&app, "GET", "/addresses?country=USA", None).await;
    assert_eq!(usa.as_array().unwrap().len(), 1);
    assert_eq!(usa[0]["city"], "New York");

    let (_, cross) =
      send(&app, "GET", "/addresses?country=USA&city=Toronto", None).await;
    assert!(cross.as_array().unwrap().is_empty());
  }

  #[tokio::test]
  async fn address_patch_missing_returns_404() {
    let (status, _) = send(
      &app(),
      "PATCH",
      "/addresses/99999999-9999-4999-8999-999999999999",
      Some(json!({ "city": "Boston" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Foods ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn food_lifecycle_create_patch_delete() {
    let app = app();

    let (status, created) = send(
      &app,
      "POST",
      "/foods",
      Some(json!({ "category": "Fruits", "nameID": "Apple", "calories": 95 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["nameID"], "Apple");
    assert_eq!(created["calories"], 95);
    assert!(created["created_at"].is_string());
    assert!(created["updated_at"].is_string());

    let (status, patched) = send(
      &app,
      "PATCH",
      "/foods/Apple",
      Some(json!({ "calories": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["calories"], 100);
    assert_eq!(patched["nameID"], "Apple");

    let (status, summary) = send(&app, "DELETE", "/foods/Apple", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      summary,
      json!({ "nameID": "Apple", "category": "Fruits", "calories": 100 })
    );

    let (status, _) = send(&app, "GET", "/foods/Apple", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn food_duplicate_name_returns_400() {
    let app = app();
    let apple = json!({ "category": "Fruits", "nameID": "Apple" });
    send(&app, "POST", "/foods", Some(apple.clone())).await;
    let (status, _) = send(&app, "POST", "/foods", Some(apple)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn food_rename_moves_entry_and_rename_collision_returns_400() {
    let app = app();
    send(
      &app,
      "POST",
      "/foods",
      Some(json!({ "category": "Fruits", "nameID": "Apple", "calories": 95 })),
    )
    .await;
    send(
      &app,
      "POST",
      "/foods",
      Some(json!({ "category": "Fruits", "nameID": "Banana", "calories": 105 })),
    )
    .await;

    // Renaming onto an existing key fails and changes nothing.
    let (status, _) = send(
      &app,
      "PATCH",
      "/foods/Apple",
      Some(json!({ "nameID": "Banana" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "GET", "/foods/Apple", None).await;
    assert_eq!(status, StatusCode::OK);

    // Renaming to a fresh key moves the merged record.
    let (status, renamed) = send(
      &app,
      "PATCH",
      "/foods/Apple",
      Some(json!({ "nameID": "Cherry", "calories": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["nameID"], "Cherry");
    assert_eq!(renamed["calories"], 50);

    let (status, _) = send(&app, "GET", "/foods/Apple", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, fetched) = send(&app, "GET", "/foods/Cherry", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, renamed);

    let (_, all) = send(&app, "GET", "/foods", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn food_calorie_filters_bound_the_range() {
    let app = app();
    for (name, calories) in
      [("Apple", json!(95)), ("Kale", json!(33)), ("Tea", Value::Null)]
    {
      send(
        &app,
        "POST",
        "/foods",
        Some(json!({
          "category": "Vegetables",
          "nameID": name,
          "calories": calories
        })),
      )
      .await;
    }

    let (_, low) = send(&app, "GET", "/foods?max_calories=50", None).await;
    let low = low.as_array().unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0]["nameID"], "Kale");

    let (_, mid) =
      send(&app, "GET", "/foods?min_calories=30&max_calories=100", None).await;
    assert_eq!(mid.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn food_delete_missing_returns_404() {
    let (status, _) = send(&app(), "DELETE", "/foods/Nothing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn food_unknown_category_is_rejected_before_storage() {
    let app = app();
    let (status, _) = send(
      &app,
      "POST",
      "/foods",
      Some(json!({ "category": "Candy", "nameID": "Gummy" })),
    )
    .await;
    assert!(status.is_client_error(), "status: {status}");

    let (_, all) = send(&app, "GET", "/foods", None).await;
    assert!(all.as_array().unwrap().is_empty());
  }

  // ── Pets ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn pet_create_get_and_patch() {
    let app = app();

    let (status, created) = send(
      &app,
      "POST",
      "/pets",
      Some(json!({ "species": "Dog", "name": "Mochi", "age": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, "GET", &format!("/pets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
      &app,
      "PATCH",
      &format!("/pets/{id}"),
      Some(json!({ "age": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["age"], Value::Null);
    assert_eq!(updated["name"], "Mochi");
  }

  #[tokio::test]
  async fn pet_list_filters_by_species() {
    let app = app();
    send(
      &app,
      "POST",
      "/pets",
      Some(json!({ "species": "Dog", "name": "Mochi" })),
    )
    .await;
    send(
      &app,
      "POST",
      "/pets",
      Some(json!({ "species": "Cat", "name": "Nori" })),
    )
    .await;

    let (_, dogs) = send(&app, "GET", "/pets?species=Dog", None).await;
    let dogs = dogs.as_array().unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0]["name"], "Mochi");
  }
}
