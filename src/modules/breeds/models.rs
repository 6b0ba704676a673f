use serde::{Deserialize, Serialize};

/// A dog breed. Breeds are read-only over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Breed {
    /// Unique identifier for the breed
    pub id: i64,
    /// Display name of the breed
    pub name: String,
}
