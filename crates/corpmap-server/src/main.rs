//! Corpmap Server - serves the company directory file over HTTP.

use anyhow::Result;
use clap::Parser;
use corpmap_server::{start_server, FileDocumentSource, ServerArgs};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.debug { "debug" } else { "info" }));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Starting {}", corpmap_core::config::AppConfig::APP_NAME);

    let source = Arc::new(FileDocumentSource::new(&args.data_file));
    let addr = start_server(&args, source).await?;

    info!("Directory available at http://{}/api/companies", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
