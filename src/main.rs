use anyhow::Context;
use shelter_app::bootstrap;
use shelter_kernel::settings::Settings;
use shelter_kernel::InitCtx;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load shelter settings")?;
    shelter_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.url,
        "shelter-app bootstrap starting"
    );

    let registry = bootstrap::registry();
    let pool = bootstrap::prepare_database(&settings, &registry).await?;

    let ctx = InitCtx {
        settings: &settings,
        db: &pool,
    };
    registry.init_all(&ctx).await?;

    tracing::info!("shelter-app bootstrap complete");

    shelter_http::start_server(&registry, &ctx).await?;

    pool.close().await;
    Ok(())
}
