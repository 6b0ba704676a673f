//! HTTP handlers for the dogs module.

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use shelter_http::{AppError, AppResult};
use shelter_kernel::DbPool;

use super::models::{AdoptionStatus, DogDetail, DogSummary};
use super::repo::{DogFilter, DogRepo};

/// Query string accepted by `GET /api/dogs`.
#[derive(Debug, Default, Deserialize)]
pub struct ListDogsParams {
    pub breed: Option<String>,
    pub status: Option<String>,
}

impl ListDogsParams {
    /// Empty values count as absent. `None` means the status names no known
    /// status, so nothing can match.
    pub fn into_filter(self) -> Option<DogFilter> {
        let breed = self.breed.filter(|breed| !breed.is_empty());
        let status = match self.status.filter(|status| !status.is_empty()) {
            Some(raw) => Some(raw.parse::<AdoptionStatus>().ok()?),
            None => None,
        };
        Some(DogFilter { breed, status })
    }
}

pub fn router(pool: DbPool) -> Router {
    Router::new()
        .route("/", get(list_dogs))
        .route("/{id}", get(get_dog))
        .with_state(pool)
}

async fn list_dogs(
    State(pool): State<DbPool>,
    Query(params): Query<ListDogsParams>,
) -> AppResult<Json<Vec<DogSummary>>> {
    let Some(filter) = params.into_filter() else {
        tracing::debug!("status filter names no known status");
        return Ok(Json(Vec::new()));
    };

    let dogs = DogRepo::list(&pool, &filter).await?;
    tracing::debug!(count = dogs.len(), ?filter, "listed dogs");
    Ok(Json(dogs))
}

async fn get_dog(
    State(pool): State<DbPool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<DogDetail>> {
    // An id that is not an i64 cannot name a dog.
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "dog id is not an integer");
        AppError::not_found("Dog not found")
    })?;

    DogRepo::find_detail(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            tracing::debug!(dog_id = id, "dog not found");
            AppError::not_found("Dog not found")
        })
}
