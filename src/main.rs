mod api;
mod app;
mod config;
mod db;
mod domain;
mod error;
mod logging;
mod routes;
mod store;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::sync::Arc;

use store::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting trivia backend"
    );

    let pool = db::create_pool(&settings).await?;
    db::verify_schema(&pool).await?;
    let state = app::AppState::new(Arc::new(PgStore::new(pool)));

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
