use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use scholaris::router::init_router;
use scholaris::state::AppState;
use scholaris_config::AppConfig;
use scholaris_db::{init_db_pool, run_migrations};
use scholaris_observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    let _log_guard = init_tracing(&config.logging);

    let db = init_db_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db)
        .await
        .context("Failed to run migrations")?;

    let state = AppState::new(db, &config);
    let app = init_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(addr = %addr, "🚀 Server running");
    info!("📖 Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
