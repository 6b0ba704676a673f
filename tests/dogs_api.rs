//! HTTP-level tests for `/api/dogs` and `/api/dogs/{id}`.
//!
//! Rows are inserted through the repositories, then read back through the
//! full router with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, get, ids, seed_breed, seed_dog, test_pool,
    test_pool_without_foreign_keys,
};
use serde_json::json;
use shelter_app::dogs::models::{AdoptionStatus, NewDog};
use shelter_app::dogs::repo::DogRepo;
use shelter_kernel::DbPool;

// ---------------------------------------------------------------------------
// Fixture: Labrador #1 available, Poodle #2 adopted
// ---------------------------------------------------------------------------

async fn two_dogs() -> DbPool {
    let pool = test_pool().await;
    let labrador = seed_breed(&pool, "Labrador").await;
    let poodle = seed_breed(&pool, "Poodle").await;

    let buddy = seed_dog(&pool, "Buddy", labrador.id, AdoptionStatus::Available).await;
    let fifi = seed_dog(&pool, "Fifi", poodle.id, AdoptionStatus::Adopted).await;
    assert_eq!((buddy.id, fifi.id), (1, 2));

    pool
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_summary_projection() {
    let app = build_test_app(two_dogs().await);

    let response = get(app, "/api/dogs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![1, 2]);

    let buddy = json
        .as_array()
        .unwrap()
        .iter()
        .find(|dog| dog["id"] == 1)
        .unwrap();
    assert_eq!(
        buddy,
        &json!({ "id": 1, "name": "Buddy", "breed": "Labrador", "status": "AVAILABLE" })
    );
}

#[tokio::test]
async fn list_on_empty_store_is_empty_array() {
    let app = build_test_app(test_pool().await);

    let json = body_json(get(app, "/api/dogs").await).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn status_filter_accepts_symbolic_name_and_display_value() {
    let pool = two_dogs().await;

    for uri in ["/api/dogs?status=AVAILABLE", "/api/dogs?status=Available"] {
        let json = body_json(get(build_test_app(pool.clone()), uri).await).await;
        assert_eq!(ids(&json), vec![1], "{uri}");
    }

    let json = body_json(get(build_test_app(pool), "/api/dogs?status=ADOPTED").await).await;
    assert_eq!(ids(&json), vec![2]);
}

#[tokio::test]
async fn unknown_status_returns_empty_array() {
    let app = build_test_app(two_dogs().await);

    let response = get(app, "/api/dogs?status=available").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn breed_filter_is_case_insensitive_substring() {
    let pool = two_dogs().await;

    for uri in ["/api/dogs?breed=lab", "/api/dogs?breed=LAB", "/api/dogs?breed=brad"] {
        let json = body_json(get(build_test_app(pool.clone()), uri).await).await;
        assert_eq!(ids(&json), vec![1], "{uri}");
    }
}

#[tokio::test]
async fn breed_filter_treats_wildcards_literally() {
    let app = build_test_app(two_dogs().await);

    let json = body_json(get(app, "/api/dogs?breed=%25").await).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn combined_filters_must_both_hold() {
    let pool = two_dogs().await;

    let json = body_json(
        get(
            build_test_app(pool.clone()),
            "/api/dogs?breed=lab&status=ADOPTED",
        )
        .await,
    )
    .await;
    assert_eq!(json, json!([]));

    let json = body_json(get(build_test_app(pool), "/api/dogs?breed=poo&status=ADOPTED").await).await;
    assert_eq!(ids(&json), vec![2]);
}

#[tokio::test]
async fn empty_filters_are_ignored() {
    let app = build_test_app(two_dogs().await);

    let json = body_json(get(app, "/api/dogs?breed=&status=").await).await;
    assert_eq!(ids(&json), vec![1, 2]);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn detail_returns_all_seven_fields() {
    let pool = test_pool().await;
    let labrador = seed_breed(&pool, "Labrador").await;
    let dog = NewDog::new("Bella", labrador.id, "Female")
        .unwrap()
        .with_age(4)
        .unwrap()
        .with_description(Some("Gentle with cats and kids"))
        .unwrap()
        .with_status(AdoptionStatus::Pending);
    let dog = DogRepo::create(&pool, &dog).await.unwrap();

    let response = get(build_test_app(pool), &format!("/api/dogs/{}", dog.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": dog.id,
            "name": "Bella",
            "breed": "Labrador",
            "age": 4,
            "description": "Gentle with cats and kids",
            "gender": "Female",
            "status": "PENDING"
        })
    );
}

#[tokio::test]
async fn detail_keeps_null_optionals() {
    let pool = two_dogs().await;

    let json = body_json(get(build_test_app(pool), "/api/dogs/1").await).await;
    assert_eq!(json["age"], serde_json::Value::Null);
    assert_eq!(json["description"], serde_json::Value::Null);
    assert_eq!(json["status"], "AVAILABLE");
}

#[tokio::test]
async fn detail_for_unknown_id_is_404() {
    let app = build_test_app(two_dogs().await);

    let response = get(app, "/api/dogs/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Dog not found" }));
}

#[tokio::test]
async fn detail_with_unparseable_id_is_404() {
    let pool = two_dogs().await;

    for uri in ["/api/dogs/buddy", "/api/dogs/1.5", "/api/dogs/99999999999999999999999"] {
        let response = get(build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_json(response).await, json!({ "error": "Dog not found" }), "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Dogs whose breed does not resolve
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dangling_breed_is_excluded_from_list_and_detail() {
    let pool = test_pool_without_foreign_keys().await;
    let labrador = seed_breed(&pool, "Labrador").await;
    let buddy = seed_dog(&pool, "Buddy", labrador.id, AdoptionStatus::Available).await;
    let stray = seed_dog(&pool, "Stray", 404, AdoptionStatus::Available).await;

    let json = body_json(get(build_test_app(pool.clone()), "/api/dogs").await).await;
    assert_eq!(ids(&json), vec![buddy.id]);

    let json = body_json(
        get(build_test_app(pool.clone()), "/api/dogs?status=AVAILABLE").await,
    )
    .await;
    assert_eq!(ids(&json), vec![buddy.id]);

    let response = get(build_test_app(pool), &format!("/api/dogs/{}", stray.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Dog not found" }));

    assert_eq!(stray.to_detail(None).breed, None);
}

#[tokio::test]
async fn foreign_keys_reject_dangling_breed_by_default() {
    let pool = test_pool().await;
    let dog = NewDog::new("Stray", 404, "Unknown").unwrap();

    assert!(DogRepo::create(&pool, &dog).await.is_err());
}
