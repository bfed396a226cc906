use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod calculator;
mod config;
mod error;
mod handlers;
mod info;
mod views;

use crate::{calculator::Calculator, config::Cli, handlers::AppState, info::HostSnapshot};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if cli.build.build_hash.is_none() {
        warn!("BUILD_HASH is not set, the diagnostics page will fail until it is configured");
    }

    let app = handlers::router(AppState {
        settings: Arc::new(cli.build),
        calculator: Arc::new(Calculator),
        host: HostSnapshot::capture,
    });

    let listener = tokio::net::TcpListener::bind((cli.bind, cli.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cli.bind, cli.port))?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
