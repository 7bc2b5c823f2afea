//! Note Store - Main Server
//!
//! Serves plain-text notes from a store root directory over HTTP.

use anyhow::Result;
use clap::Parser;
use note_store::{Config, ConfigOverrides};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "note-store")]
#[command(about = "Plain-text note server", version)]
// -h is the host flag; help stays available as --help
#[command(disable_help_flag = true)]
struct Cli {
    /// Server host
    #[arg(short = 'h', long, env = "NOTES_HOST")]
    host: Option<String>,

    /// Server port
    #[arg(short, long, env = "NOTES_PORT")]
    port: Option<u16>,

    /// Store root directory (created if missing)
    #[arg(
        short = 'c',
        long = "cache",
        visible_alias = "store-dir",
        env = "NOTES_STORE_DIR"
    )]
    store_dir: Option<PathBuf>,

    /// YAML config file (defaults to ./config.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,note_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        host: cli.host,
        port: cli.port,
        store_dir: cli.store_dir,
    };
    let config = Config::resolve(overrides, cli.config.as_deref())?;

    note_store::start_server(config).await
}
