#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use shelter_app::bootstrap;
use shelter_app::breeds::models::Breed;
use shelter_app::breeds::repo::BreedRepo;
use shelter_app::dogs::models::{AdoptionStatus, Dog, NewDog};
use shelter_app::dogs::repo::DogRepo;
use shelter_kernel::settings::{DatabaseSettings, Settings};
use shelter_kernel::{DbPool, InitCtx};

/// Fresh in-memory database with every module migration applied.
pub async fn test_pool() -> DbPool {
    pool_with(DatabaseSettings::in_memory()).await
}

/// Same as [`test_pool`] but without foreign key enforcement, so dogs can
/// point at breeds that do not exist.
pub async fn test_pool_without_foreign_keys() -> DbPool {
    pool_with(DatabaseSettings {
        foreign_keys: false,
        ..DatabaseSettings::in_memory()
    })
    .await
}

async fn pool_with(database: DatabaseSettings) -> DbPool {
    let settings = Settings {
        database,
        ..Settings::default()
    };
    bootstrap::prepare_database(&settings, &bootstrap::registry())
        .await
        .unwrap()
}

/// Build the full application router over `pool`, exactly as the server does.
pub fn build_test_app(pool: DbPool) -> Router {
    let settings = Settings::default();
    let registry = bootstrap::registry();
    let ctx = InitCtx {
        settings: &settings,
        db: &pool,
    };
    shelter_http::build_router(&registry, &ctx)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn seed_breed(pool: &DbPool, name: &str) -> Breed {
    BreedRepo::create(pool, name).await.unwrap()
}

pub async fn seed_dog(pool: &DbPool, name: &str, breed_id: i64, status: AdoptionStatus) -> Dog {
    let dog = NewDog::new(name, breed_id, "Male")
        .unwrap()
        .with_status(status);
    DogRepo::create(pool, &dog).await.unwrap()
}

/// Ids from a JSON array response, sorted.
pub fn ids(json: &serde_json::Value) -> Vec<i64> {
    let mut ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids
}
