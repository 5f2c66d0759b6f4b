mod handlers;
mod pages;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{prelude::*, state::AppState};

pub fn router(app: Arc<AppState>) -> Router {
  let static_files = ServeDir::new(&app.config.static_dir);

  Router::new()
    .route("/", get(handlers::index))
    .route("/health", get(handlers::health))
    .route(
      "/cadastrar_equipamento",
      get(handlers::register_form).post(handlers::register),
    )
    .route("/equipamentos", get(handlers::list))
    .route(
      "/adicionar_historico/{equip_id}",
      get(handlers::history_form).post(handlers::add_history),
    )
    .route("/historico/{equip_id}", get(handlers::history))
    .route("/gerar_qr/{equip_id}", get(handlers::generate_qr))
    .nest_service("/static", static_files)
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    .with_state(app)
}

pub async fn serve(app: Arc<AppState>) -> anyhow::Result<()> {
  tokio::fs::create_dir_all(app.config.qr_directory())
    .await
    .context("Failed to create QR code directory")?;

  let addr = SocketAddr::from(([0, 0, 0, 0], app.config.port));
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .with_context(|| format!("Failed to bind {addr}"))?;
  info!("HTTP server listening on {addr}");

  axum::serve(listener, router(app)).await.context("Axum server error")
}
