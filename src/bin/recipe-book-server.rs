// ABOUTME: Recipe Book HTTP server binary
// ABOUTME: Loads configuration, opens the database, and serves the axum router until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Book Server Binary
//!
//! Startup aborts before the listener binds when `SPOONACULAR_API_KEY` is
//! missing or the database cannot be opened.

use anyhow::{Context, Result};
use clap::Parser;
use recipe_book::{
    config::ServerConfig, database::Database, logging, resources::ServerResources,
    routes::build_router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};

/// How often idle sessions are swept
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "recipe-book-server")]
#[command(about = "Recipe Book - search, browse, and like recipes from Spoonacular")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Startup aborted: {}", e);
            return Err(e.into());
        }
    };

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());

    let database = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    let config = Arc::new(config);
    let resources = Arc::new(
        ServerResources::with_spoonacular(database, config.clone())
            .context("Failed to initialize recipe provider")?,
    );
    let _session_sweeper = resources.sessions.spawn_cleanup_task(SESSION_SWEEP_INTERVAL);

    let app = build_router(resources);
    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!("Recipe Book listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Recipe Book stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
