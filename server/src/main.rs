//! Product server: loads settings from the environment (and `.env`), opens the PostgreSQL pool,
//! and serves the product routes.
//!
//! Run from repo root: `cargo run -p product-server`

use product_api::{app, AppState, PgProductStore, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "product_api=info,product_server=info,tower_http=info",
                )
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    tracing::debug!(?settings, "settings loaded");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect_with(settings.database.connect_options()?)
        .await?;

    let state = AppState::new(PgProductStore::new(pool));
    let router = app(state);

    let listener = TcpListener::bind(("0.0.0.0", settings.listen_port)).await?;
    tracing::info!("server is up and running on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
