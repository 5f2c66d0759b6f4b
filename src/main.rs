//! Equipment inventory - maintenance history tracking with QR lookup
//!
//! Architecture:
//! - SeaORM for database access (SQLite), schema managed by `migration`
//! - Axum for server-rendered pages
//! - Tokio for async runtime

mod config;
mod date;
mod entity;
mod error;
mod prelude;
mod server;
mod state;
mod sv;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;
use crate::prelude::*;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  // Initialize tracing
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      "equipamentos=debug,tower_http=debug,axum=trace,sea_orm=warn".into()
    }))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env();

  info!("Starting equipamentos v{}", env!("CARGO_PKG_VERSION"));
  info!(
    "QR codes link to http://{}:{}/historico/<id>",
    config.qr_host, config.qr_port
  );

  let app = Arc::new(
    AppState::new(config).await.context("Failed to initialize database")?,
  );

  server::serve(app).await
}
