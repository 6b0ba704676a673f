pub mod models;
pub mod repo;
pub mod routes;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use shelter_kernel::{InitCtx, Migration, Module};

/// Serves the dog catalog under `/api/dogs`
pub struct DogsModule;

impl DogsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for DogsModule {
    fn name(&self) -> &'static str {
        "dogs"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let dogs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dogs")
            .fetch_one(ctx.db)
            .await?;

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            dogs,
            "dogs module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: &InitCtx<'_>) -> Router {
        routes::router(ctx.db.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List dogs",
                        "tags": ["Dogs"],
                        "parameters": [
                            {
                                "name": "breed",
                                "in": "query",
                                "required": false,
                                "description": "Case-insensitive substring of the breed name",
                                "schema": { "type": "string" }
                            },
                            {
                                "name": "status",
                                "in": "query",
                                "required": false,
                                "description": "Adoption status (AVAILABLE, ADOPTED, PENDING)",
                                "schema": { "type": "string" }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Dogs matching every given filter",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/DogSummary" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get a dog",
                        "tags": ["Dogs"],
                        "parameters": [
                            {
                                "name": "id",
                                "in": "path",
                                "required": true,
                                "schema": { "type": "integer" }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Dog detail",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/DogDetail" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Dog not found",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "AdoptionStatus": {
                        "type": "string",
                        "enum": ["AVAILABLE", "ADOPTED", "PENDING"]
                    },
                    "Gender": {
                        "type": "string",
                        "enum": ["Male", "Female", "Unknown"]
                    },
                    "DogSummary": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "name": { "type": "string" },
                            "breed": { "type": "string" },
                            "status": { "$ref": "#/components/schemas/AdoptionStatus" }
                        },
                        "required": ["id", "name", "breed", "status"]
                    },
                    "DogDetail": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "name": { "type": "string" },
                            "breed": { "type": ["string", "null"] },
                            "age": { "type": ["integer", "null"], "minimum": 0, "maximum": 20 },
                            "description": { "type": ["string", "null"] },
                            "gender": { "$ref": "#/components/schemas/Gender" },
                            "status": { "$ref": "#/components/schemas/AdoptionStatus" }
                        },
                        "required": ["id", "name", "breed", "age", "description", "gender", "status"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE IF NOT EXISTS dogs (
                    id            INTEGER PRIMARY KEY AUTOINCREMENT,
                    name          TEXT NOT NULL,
                    breed_id      INTEGER NOT NULL REFERENCES breeds (id),
                    age           INTEGER CHECK (age IS NULL OR age BETWEEN 0 AND 20),
                    gender        TEXT NOT NULL CHECK (gender IN ('Male', 'Female', 'Unknown')),
                    description   TEXT,
                    status        TEXT NOT NULL DEFAULT 'AVAILABLE'
                                  CHECK (status IN ('AVAILABLE', 'ADOPTED', 'PENDING')),
                    intake_date   TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                    adoption_date TEXT
                );
                CREATE INDEX IF NOT EXISTS dogs_breed_id_idx ON dogs (breed_id);
                "#,
        }]
    }
}

/// Create a new instance of the dogs module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(DogsModule::new())
}
