// Z-Chat V1 Backend Entry Point
// Character catalog, conversation history, and the rule-based response engine.

mod config;
mod database;
mod engine;
mod error;
mod models;
mod rate_limiter;
mod routes;

#[cfg(test)]
mod tests;

use anyhow::Context;
use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use config::AppConfig;
use routes::AppState;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting = BunyanFormattingLayer::new("zchat-core".to_string(), std::io::stdout);
    let subscriber = Registry::default()
        .with(filter)
        .with(JsonStorageLayer)
        .with(formatting);
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to install tracing subscriber");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    // The template bank is static; an unusable pool is a deploy-time defect,
    // so refuse to serve at all.
    engine::templates::validate().context("template bank validation failed")?;

    let config = AppConfig::from_env().context("invalid configuration")?;
    let pool = database::init_db(&config.database_url)
        .await
        .context("database initialization failed")?;

    let state = AppState::new(pool, &config);
    let app = routes::app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
