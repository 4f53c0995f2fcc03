mod app;
mod args;
mod config;
mod routes;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::AppState;
use crate::args::Args;
use crate::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(args.log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut settings = match &args.config {
        Some(path) => {
            info!("loading settings" = %path.display());
            Settings::from_toml(path)?
        }
        None => Settings::default(),
    };
    if let Some(host) = args.host {
        settings.app.host = host;
    }
    if let Some(port) = args.port {
        settings.app.port = port;
    }
    info!(
        grid_length = settings.game.grid_length,
        goal = settings.game.goal_number,
        mode = %settings.recommendation.mode,
        "game settings"
    );

    let router = app::router(AppState::from_settings(&settings));

    let addr: SocketAddr = format!("{}:{}", settings.app.host, settings.app.port)
        .parse()
        .context("invalid host/port combination")?;
    info!("listening" = %addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("shutting down");
}
