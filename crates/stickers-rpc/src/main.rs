//! Stickers RPC Server - HTTP front end for sticker search.
//!
//! Serves the messaging compose-extension endpoint and a JSON-RPC 2.0
//! endpoint on top of the stickers-core library.

mod cards;
mod handlers;
mod server;

use anyhow::Result;
use clap::Parser;
use server::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use stickers_core::{HttpStickerSetRepository, Settings};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "stickers-rpc")]
#[command(about = "HTTP and JSON-RPC server for sticker search")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Directory holding local.settings.json (defaults to the current directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Sticker configuration document URI, overriding the settings file
    #[arg(long)]
    config_uri: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over --debug when set
    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Starting Stickers RPC Server");

    let base_dir = match args.base_dir {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    info!("Base directory: {}", base_dir.display());

    let settings = Settings::load(&base_dir)?.with_config_uri(args.config_uri);
    match &settings.config_uri {
        Some(uri) => info!("Sticker configuration: {}", uri),
        None => info!("No sticker configuration; the default set will be served"),
    }

    let repository = HttpStickerSetRepository::new(&settings)?;
    let state = Arc::new(AppState::new(Arc::new(repository), settings));

    let addr = server::start_server(state, &args.host, args.port).await?;

    // Port line on stdout for the parent process (intentional stdout for IPC)
    println!("RPC_PORT={}", addr.port());

    info!("RPC server running on {}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
