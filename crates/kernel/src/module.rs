use async_trait::async_trait;
use axum::Router;

/// Shared SQLite connection pool handed to every module.
pub type DbPool = sqlx::SqlitePool;

/// Borrowed handles a module receives at init, start and route-building time.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub db: &'a DbPool,
}

/// One SQL script, recorded in `schema_migrations` under `(module, id)` once applied.
#[derive(Debug, Clone)]
pub struct Migration {
    pub id: &'static str,
    pub up: &'static str,
}

/// A self-contained slice of the shelter API.
#[async_trait]
pub trait Module: Sync + Send {
    /// Mount point and migration namespace; must be unique within a registry.
    fn name(&self) -> &'static str;

    /// Runs once after every migration has been applied.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Routes relative to `/api/{name}`.
    fn routes(&self, _ctx: &InitCtx<'_>) -> Router {
        Router::new()
    }

    /// `paths` and `components.schemas` to merge into the served OpenAPI document.
    /// Path keys are relative to the module mount point.
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![]
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs after the server has drained, in reverse registration order.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
