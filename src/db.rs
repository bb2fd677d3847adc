//! Database connection pool management

use anyhow::{Context, Result};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Settings;

fn pool_options(settings: &Settings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
}

/// Create the PostgreSQL pool shared by every request.
///
/// A connection is checked out per query and handed back when the query
/// future finishes or is dropped, so no handler has to release it by hand.
pub async fn create_pool(settings: &Settings) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&settings.database_url)
        .context("Invalid DATABASE_URL")?
        .application_name("trivia-backend");

    let pool = pool_options(settings)
        .connect_with(connect_options)
        .await
        .context("Failed to connect to PostgreSQL")?;

    tracing::info!(
        max_connections = settings.database_max_connections,
        "Database connection pool established"
    );

    Ok(pool)
}

/// Fail startup early when the trivia tables are missing, and report their sizes.
///
/// Schema creation is handled outside this service.
pub async fn verify_schema(pool: &PgPool) -> Result<()> {
    let (categories, questions): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM categories), (SELECT COUNT(*) FROM questions)",
    )
    .fetch_one(pool)
    .await
    .context("Trivia schema check failed; expected `categories` and `questions` tables")?;

    if categories == 0 {
        tracing::warn!("No categories defined; GET /categories will answer 404");
    }

    tracing::info!(categories, questions, "Trivia schema verified");
    Ok(())
}
