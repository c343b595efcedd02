//! cobj-web - Web front end for HubSpot custom object records.
//!
//! Responsibilities:
//! - Load configuration from `.env` and the environment.
//! - Build the CRM client and record repository once.
//! - Serve the router until Ctrl+C, then drain in-flight requests.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE configuration is read.
//! - Configuration and bind failures exit non-zero before any request is served.

mod args;
mod error;

use std::sync::Arc;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use cobj_client::{CrmClient, CrmRecordRepository};
use cobj_config::{Config, ConfigError, ConfigLoader};
use cobj_web::{AppState, router};
use error::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let config = match build_config(loader, &cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let client = match CrmClient::builder().from_config(&config).build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build HubSpot client: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let repository = CrmRecordRepository::new(client, config.object.clone());
    let state = AppState::new(Arc::new(repository), &config.object);

    let addr = config.server.bind_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(ExitCode::BindError.as_i32());
        }
    };

    info!(
        object_type = %config.object.object_type,
        "Server running on http://localhost:{}", config.server.port
    );

    if let Err(e) = serve(listener, state).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }
}

/// Read the environment and apply command-line overrides.
fn build_config(loader: ConfigLoader, cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = loader.from_env()?;
    if let Some(port) = cli.port {
        loader = loader.with_port(port);
    }
    loader.build()
}

async fn serve(listener: tokio::net::TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested, draining in-flight requests");
}
