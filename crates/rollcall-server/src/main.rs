//! rollcall server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), builds an
//! in-memory store from the configured seed, and serves the JSON API over
//! HTTP.
//!
//! ```
//! rollcall --config rollcall.toml
//! ROLLCALL_PORT=9000 rollcall
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use rollcall_server::{ServerConfig, router, spawn_event_log};
use rollcall_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Rollcall attendance server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store = MemoryStore::new(server_cfg.seed()).context("invalid seed data")?;
  tracing::info!(demo = server_cfg.demo, "store ready");

  spawn_event_log(store.subscribe());

  let app = router(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
