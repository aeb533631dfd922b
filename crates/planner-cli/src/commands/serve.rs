use anyhow::Result;
use planner_core::repository::SqliteRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::cli::ServeCommand;
use crate::config::Config;
use crate::http::{build_router, AppState};

pub async fn serve(repo: SqliteRepository, command: ServeCommand, config: &Config) -> Result<()> {
    let state = Arc::new(AppState::new(repo, config.tz(), config.list_limit));
    let app = build_router(state, &config.web_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], command.port.unwrap_or(config.port)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, web_dir = %config.web_dir.display(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
