//! HTTP service wiring for Rollcall.
//!
//! Builds the store from configuration, mounts the JSON API under `/api`
//! and logs every store change.

use std::{path::Path, sync::Arc};

use axum::Router;
use rollcall_core::{event::StoreEvent, store::AttendanceStore};
use rollcall_store_memory::Seed;
use serde::Deserialize;
use tokio::{
  sync::broadcast::{self, error::RecvError},
  task::JoinHandle,
};
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROLLCALL_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  /// Start from the built-in demo roster; `seed` is ignored when set.
  pub demo: bool,
  #[serde(default)]
  pub seed: Seed,
}

impl ServerConfig {
  /// Read `path` if it exists, then apply environment overrides.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::from_sources(config::File::from(path).required(false), environment())
  }

  /// Defaults, then `file`, then `env`; later sources win.
  fn from_sources<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
  where
    F: config::Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("demo", true)?
      .add_source(file)
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  /// The seed the store should be built from.
  pub fn seed(&self) -> Seed {
    if self.demo { Seed::demo() } else { self.seed.clone() }
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// `ROLLCALL_HOST`, `ROLLCALL_PORT`, `ROLLCALL_DEMO`.
fn environment() -> config::Environment { config::Environment::with_prefix("ROLLCALL") }

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API nested under `/api`, with request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: AttendanceStore + 'static,
{
  Router::new()
    .nest("/api", rollcall_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

// ─── Event log ────────────────────────────────────────────────────────────────

/// Log each [`StoreEvent`] until the channel closes.
pub fn spawn_event_log(mut events: broadcast::Receiver<StoreEvent>) -> JoinHandle<()> {
  tokio::spawn(async move {
    loop {
      match events.recv().await {
        Ok(event) => log_event(&event),
        Err(RecvError::Lagged(skipped)) => {
          tracing::warn!(skipped, "event log fell behind");
        }
        Err(RecvError::Closed) => break,
      }
    }
  })
}

fn log_event(event: &StoreEvent) {
  match event {
    StoreEvent::ActivityAdded { activity } => tracing::info!(
      event = event.name(),
      id = %activity.id,
      title = %activity.title,
      "store changed"
    ),
    StoreEvent::AttendanceMarked { record, .. } => tracing::info!(
      event = event.name(),
      activity = %record.activity_id,
      student = %record.student_id,
      date = %record.date,
      present = record.is_present,
      "store changed"
    ),
  }
}
