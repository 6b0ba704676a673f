pub mod models;
pub mod repo;

use async_trait::async_trait;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use shelter_http::AppResult;
use shelter_kernel::{DbPool, InitCtx, Migration, Module};

use models::Breed;
use repo::BreedRepo;

/// Serves the breed catalog under `/api/breeds`
pub struct BreedsModule;

impl BreedsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for BreedsModule {
    fn name(&self) -> &'static str {
        "breeds"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "breeds module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: &InitCtx<'_>) -> Router {
        Router::new()
            .route("/", get(list_breeds))
            .with_state(ctx.db.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List breeds",
                        "tags": ["Breeds"],
                        "responses": {
                            "200": {
                                "description": "Every breed",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Breed" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Breed": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "description": "Unique identifier for the breed" },
                            "name": { "type": "string", "description": "Display name of the breed" }
                        },
                        "required": ["id", "name"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE IF NOT EXISTS breeds (
                    id   INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL
                );
                "#,
        }]
    }
}

async fn list_breeds(State(pool): State<DbPool>) -> AppResult<Json<Vec<Breed>>> {
    let breeds = BreedRepo::list(&pool).await?;
    Ok(Json(breeds))
}

/// Create a new instance of the breeds module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BreedsModule::new())
}
