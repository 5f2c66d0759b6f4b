use sea_orm::SqlErr;
use serde::Deserialize;

use crate::{entity::equipment, prelude::*};

/// Registration form for one asset.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEquipment {
  pub patrimonio: String,
  pub nome: String,
  pub modelo: String,
  pub marca: String,
  pub fabricante: String,
  pub numero_serie: String,
}

pub struct Equipment<'a> {
  db: &'a DatabaseConnection,
}

impl equipment::Model {
  /// Whether the asset tag, name or model contains `needle`, which must
  /// already be lowercase.
  fn matches(&self, needle: &str) -> bool {
    [&self.patrimonio, &self.nome, &self.modelo]
      .into_iter()
      .any(|field| field.to_lowercase().contains(needle))
  }
}

impl<'a> Equipment<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, new: NewEquipment) -> Result<equipment::Model> {
    let patrimonio = new.patrimonio.clone();

    let equipment = equipment::ActiveModel {
      id: NotSet,
      patrimonio: Set(new.patrimonio),
      nome: Set(new.nome),
      modelo: Set(new.modelo),
      marca: Set(new.marca),
      fabricante: Set(new.fabricante),
      numero_serie: Set(new.numero_serie),
      historico_detalhado: Set(None),
      observacoes: Set(None),
    };

    let equipment = equipment.insert(self.db).await.map_err(|err| {
      match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
          Error::DuplicateKey(patrimonio)
        }
        _ => Error::Database(err),
      }
    })?;

    info!("Registered equipment #{} ({})", equipment.id, equipment.patrimonio);
    Ok(equipment)
  }

  /// All equipment in registration order, or only the rows whose asset tag,
  /// name or model contains `search` ignoring case.
  pub async fn list(
    &self,
    search: Option<&str>,
  ) -> Result<Vec<equipment::Model>> {
    let rows = equipment::Entity::find()
      .order_by_asc(equipment::Column::Id)
      .all(self.db)
      .await?;

    let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) else {
      return Ok(rows);
    };

    // SQLite `LOWER` folds ASCII only, so matching happens here
    let needle = term.to_lowercase();
    Ok(rows.into_iter().filter(|e| e.matches(&needle)).collect())
  }

  pub async fn by_id(&self, id: i32) -> Result<Option<equipment::Model>> {
    let equipment = equipment::Entity::find_by_id(id).one(self.db).await?;
    Ok(equipment)
  }

  pub async fn get(&self, id: i32) -> Result<equipment::Model> {
    self.by_id(id).await?.ok_or(Error::NotFound)
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(equipment::Entity::find().count(self.db).await?)
  }
}
