use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use reservo_api::{app, AppState};
use reservo_catalog::Catalog;
use reservo_core::notify::NoopNotifier;
use reservo_store::{app_config::Config, DbClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reservo_api=debug,reservo_booking=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Reservo on port {}", config.server.port);

    let catalog = Catalog::from_path(&config.catalog.path).context("Failed to load item catalog")?;

    let db = DbClient::new(&config.database)
        .await
        .context("Failed to open reservation store")?;
    db.migrate().await.context("Failed to run migrations")?;

    let app_state = AppState::new(&db, catalog, Arc::new(NoopNotifier));
    let app = app(app_state);

    let addr = SocketAddr::new(config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Unexpected error happened in server")?;

    db.close().await;
    tracing::info!("Store closed, bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
