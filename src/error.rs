//! Error types for the equipment service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("Database error: {0}")]
  Database(#[from] DbErr),

  #[error("Schema migration failed: {0}")]
  Migration(#[source] DbErr),

  #[error("Patrimônio já cadastrado: {0}")]
  DuplicateKey(String),

  #[error("Equipamento não encontrado")]
  NotFound,

  #[error("Formato de data inválido. Use DD/MM/AAAA.")]
  InvalidDate,

  #[error("QR code error: {0}")]
  Qr(#[from] qrcode::types::QrError),

  #[error("Image error: {0}")]
  Image(#[from] image::ImageError),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::NotFound => StatusCode::NOT_FOUND,
      Error::InvalidDate => StatusCode::BAD_REQUEST,
      Error::DuplicateKey(tag) => {
        tracing::warn!("Rejected duplicate asset tag `{tag}`");
        StatusCode::CONFLICT
      }
      Error::Database(_)
      | Error::Migration(_)
      | Error::Qr(_)
      | Error::Image(_)
      | Error::Io(_) => {
        tracing::error!("{self}");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno")
          .into_response();
      }
    };

    (status, self.to_string()).into_response()
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
