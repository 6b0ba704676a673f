use shelter_kernel::DbPool;

use super::models::Breed;

/// Data access for the `breeds` table.
pub struct BreedRepo;

impl BreedRepo {
    /// Every breed, in the store's natural order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Breed>, sqlx::Error> {
        sqlx::query_as::<_, Breed>("SELECT id, name FROM breeds")
            .fetch_all(pool)
            .await
    }

    /// First breed whose name matches exactly.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Breed>, sqlx::Error> {
        sqlx::query_as::<_, Breed>("SELECT id, name FROM breeds WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &DbPool, name: &str) -> Result<Breed, sqlx::Error> {
        sqlx::query_as::<_, Breed>("INSERT INTO breeds (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
