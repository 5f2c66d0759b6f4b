use std::sync::Arc;

use axum::{
  Form,
  extract::{Path, Query, State},
  response::{Html, Redirect},
};
use serde::Deserialize;

use super::pages;
use crate::{
  prelude::*,
  state::AppState,
  sv::{NewEquipment, NewHistory},
};

pub async fn index() -> Redirect {
  Redirect::to("/equipamentos")
}

pub async fn health(State(app): State<Arc<AppState>>) -> Result<&'static str> {
  app.sv().equipment.count().await?;
  Ok("OK")
}

pub async fn register_form() -> Html<String> {
  Html(pages::register_form())
}

pub async fn register(
  State(app): State<Arc<AppState>>,
  Form(new): Form<NewEquipment>,
) -> Result<Redirect> {
  app.sv().equipment.create(new).await?;
  Ok(Redirect::to("/equipamentos"))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
  pub busca: Option<String>,
}

pub async fn list(
  State(app): State<Arc<AppState>>,
  Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
  let busca = query.busca.unwrap_or_default();
  let rows = app.sv().equipment.list(Some(&busca)).await?;
  Ok(Html(pages::equipment_list(&rows, &busca)))
}

pub async fn history_form(
  State(app): State<Arc<AppState>>,
  Path(equip_id): Path<i32>,
) -> Result<Html<String>> {
  let equipment = app.sv().equipment.get(equip_id).await?;
  Ok(Html(pages::history_form(equip_id, &equipment.patrimonio)))
}

pub async fn add_history(
  State(app): State<Arc<AppState>>,
  Path(equip_id): Path<i32>,
  Form(new): Form<NewHistory>,
) -> Result<Redirect> {
  app.sv().history.create(equip_id, new).await?;
  Ok(Redirect::to(&format!("/historico/{equip_id}")))
}

pub async fn history(
  State(app): State<Arc<AppState>>,
  Path(equip_id): Path<i32>,
) -> Result<Html<String>> {
  let sv = app.sv();
  let equipment = sv.equipment.get(equip_id).await?;
  let entries = sv.history.by_equipment(equip_id).await?;
  Ok(Html(pages::history_page(&equipment, &entries)))
}

pub async fn generate_qr(
  State(app): State<Arc<AppState>>,
  Path(equip_id): Path<i32>,
) -> Result<Html<String>> {
  let file_name = app.sv().qr.generate(equip_id).await?;
  Ok(Html(pages::qr_page(equip_id, &file_name)))
}
