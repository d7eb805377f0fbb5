//! Gongke API server binary.

#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use gongke_api::{serve, AppState};
use gongke_notion::{NotionClient, NotionConfig};

/// Gongke practice-log submission relay
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address
    #[arg(long, env = "GONGKE_ADDR", default_value = "0.0.0.0:8784")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = NotionConfig::from_env();
    let database_id = config.database_id.clone();
    let writer = Arc::new(NotionClient::new(config));

    serve(args.addr, AppState::new(writer, database_id)).await?;

    Ok(())
}
