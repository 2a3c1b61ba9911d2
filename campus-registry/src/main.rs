use std::sync::Arc;

use anyhow::Context;
use campus_registry::api::{self, AppState};
use campus_registry::config::Config;
use campus_registry::db;
use campus_registry::repository::PgUniversityRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campus Registry...");

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");

    let pool = db::create_pool(&config)
        .await
        .context("Failed to create database pool")?;

    tracing::info!("Database connection pool created");

    let repository = PgUniversityRepository::new(pool);
    let app = api::create_router(AppState::new(Arc::new(repository)));

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
