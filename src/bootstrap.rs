//! Wiring shared by the server binary and the CLI.

use anyhow::Context;
use shelter_kernel::settings::Settings;
use shelter_kernel::{DbPool, ModuleRegistry};

use crate::modules;

/// Registry holding every application module.
pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Connect to the configured database and apply pending module migrations.
pub async fn prepare_database(
    settings: &Settings,
    registry: &ModuleRegistry,
) -> anyhow::Result<DbPool> {
    let pool = shelter_db::connect(&settings.database)
        .await
        .context("failed to open database")?;

    let applied = shelter_db::run_migrations(&pool, &registry.collect_migrations())
        .await
        .context("failed to apply migrations")?;

    tracing::info!(applied, "database schema up to date");
    Ok(pool)
}
