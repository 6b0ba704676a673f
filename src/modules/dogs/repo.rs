//! Read queries over `dogs` joined to `breeds`, plus the insert used for
//! seeding.
//!
//! Every read is an inner join, so a dog whose `breed_id` has no breed row is
//! invisible to both the list and the detail query.

use sqlx::{QueryBuilder, Sqlite};

use shelter_kernel::DbPool;

use super::models::{AdoptionStatus, Dog, DogDetail, DogSummary, NewDog};

/// Column list for full `dogs` rows.
const DOG_COLUMNS: &str = "\
    id, name, breed_id, age, gender, description, status, \
    intake_date, adoption_date";

/// Optional filters for the dog listing. Both must hold when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogFilter {
    /// Case-insensitive substring of the breed name.
    pub breed: Option<String>,
    pub status: Option<AdoptionStatus>,
}

/// Data access for the `dogs` table.
pub struct DogRepo;

impl DogRepo {
    /// Dogs matching `filter`, in the store's natural order.
    pub async fn list(pool: &DbPool, filter: &DogFilter) -> Result<Vec<DogSummary>, sqlx::Error> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT d.id, d.name, b.name AS breed, d.status \
             FROM dogs d \
             INNER JOIN breeds b ON d.breed_id = b.id \
             WHERE 1 = 1",
        );

        // SQLite LIKE folds ASCII case only.
        if let Some(breed) = &filter.breed {
            query
                .push(" AND b.name LIKE ")
                .push_bind(contains_pattern(breed))
                .push(" ESCAPE '\\'");
        }

        if let Some(status) = filter.status {
            query.push(" AND d.status = ").push_bind(status);
        }

        query.build_query_as::<DogSummary>().fetch_all(pool).await
    }

    /// Full projection of one dog, or `None` when the id is unknown or its
    /// breed does not resolve.
    pub async fn find_detail(pool: &DbPool, id: i64) -> Result<Option<DogDetail>, sqlx::Error> {
        sqlx::query_as::<_, DogDetail>(
            "SELECT d.id, d.name, b.name AS breed, d.age, d.description, d.gender, d.status \
             FROM dogs d \
             INNER JOIN breeds b ON d.breed_id = b.id \
             WHERE d.id = ? \
             LIMIT 1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Whether a dog with exactly this name is already recorded for `breed_id`.
    pub async fn exists(pool: &DbPool, name: &str, breed_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM dogs WHERE name = ? AND breed_id = ?)",
        )
        .bind(name)
        .bind(breed_id)
        .fetch_one(pool)
        .await
    }

    pub async fn create(pool: &DbPool, dog: &NewDog) -> Result<Dog, sqlx::Error> {
        let query = format!(
            "INSERT INTO dogs \
                 (name, breed_id, age, gender, description, status, intake_date, adoption_date) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {DOG_COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(dog.name())
            .bind(dog.breed_id())
            .bind(dog.age())
            .bind(dog.gender())
            .bind(dog.description())
            .bind(dog.status())
            .bind(dog.intake_date())
            .bind(dog.adoption_date())
            .fetch_one(pool)
            .await
    }
}

/// `%needle%` with LIKE wildcards in the needle escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_and_escapes() {
        assert_eq!(contains_pattern("lab"), "%lab%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
