use serde::Deserialize;

use crate::{
  date,
  entity::{equipment, history},
  prelude::*,
};

/// Maintenance record as submitted; dates are still `DD/MM/YYYY` text.
#[derive(Debug, Clone, Deserialize)]
pub struct NewHistory {
  pub data: String,
  pub proxima_manutencao: String,
  pub tipo_servico: String,
  pub responsavel_execucao: String,
  pub responsavel_analise: String,
  pub local_uso: String,
  #[serde(default)]
  pub historico_detalhado: Option<String>,
  #[serde(default)]
  pub observacoes: Option<String>,
}

pub struct History<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> History<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(
    &self,
    equipment_id: i32,
    new: NewHistory,
  ) -> Result<history::Model> {
    let txn = self.db.begin().await?;

    equipment::Entity::find_by_id(equipment_id)
      .one(&txn)
      .await?
      .ok_or(Error::NotFound)?;

    let (Some(data), Some(proxima_manutencao)) =
      (date::parse(&new.data), date::parse(&new.proxima_manutencao))
    else {
      return Err(Error::InvalidDate);
    };

    let entry = history::ActiveModel {
      id: NotSet,
      equipamento_id: Set(equipment_id),
      data: Set(data),
      tipo_servico: Set(new.tipo_servico),
      responsavel_execucao: Set(new.responsavel_execucao),
      responsavel_analise: Set(new.responsavel_analise),
      proxima_manutencao: Set(proxima_manutencao),
      local_uso: Set(new.local_uso),
      historico_detalhado: Set(Some(
        new.historico_detalhado.unwrap_or_default(),
      )),
      observacoes: Set(Some(new.observacoes.unwrap_or_default())),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!("Recorded maintenance #{} for equipment #{equipment_id}", entry.id);
    Ok(entry)
  }

  /// Entries of one equipment item in insertion order.
  pub async fn by_equipment(
    &self,
    equipment_id: i32,
  ) -> Result<Vec<history::Model>> {
    let entries = history::Entity::find()
      .filter(history::Column::EquipamentoId.eq(equipment_id))
      .order_by_asc(history::Column::Id)
      .all(self.db)
      .await?;
    Ok(entries)
  }

  #[cfg(test)]
  pub async fn count(&self) -> Result<u64> {
    Ok(history::Entity::find().count(self.db).await?)
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use sea_orm::{ConnectionTrait, Statement};

  use super::*;
  use crate::sv::{
    Equipment,
    equipment::tests::{new_equipment, setup_test_db},
  };

  pub fn new_history(data: &str, proxima: &str) -> NewHistory {
    NewHistory {
      data: data.into(),
      proxima_manutencao: proxima.into(),
      tipo_servico: "Calibração".into(),
      responsavel_execucao: "Ana".into(),
      responsavel_analise: "Bruno".into(),
      local_uso: "Laboratório 2".into(),
      historico_detalhado: None,
      observacoes: Some("Sem ressalvas".into()),
    }
  }

  #[tokio::test]
  async fn test_create_entry() {
    let db = setup_test_db().await;
    let equipment = Equipment::new(&db)
      .create(new_equipment("PAT-1", "Balança", "B100"))
      .await
      .unwrap();

    let entry = History::new(&db)
      .create(equipment.id, new_history("15/03/2024", "15/03/2025"))
      .await
      .unwrap();

    assert_eq!(entry.equipamento_id, equipment.id);
    assert_eq!(entry.data, Date::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(
      entry.proxima_manutencao,
      Date::from_ymd_opt(2025, 3, 15).unwrap()
    );
    assert_eq!(entry.historico_detalhado.as_deref(), Some(""));
    assert_eq!(entry.observacoes.as_deref(), Some("Sem ressalvas"));
  }

  #[tokio::test]
  async fn test_dates_stored_as_iso_text() {
    let db = setup_test_db().await;
    let equipment = Equipment::new(&db)
      .create(new_equipment("PAT-1", "Balança", "B100"))
      .await
      .unwrap();
    History::new(&db)
      .create(equipment.id, new_history("05/01/2024", "31/12/2024"))
      .await
      .unwrap();

    let row = db
      .query_one(Statement::from_string(
        db.get_database_backend(),
        "SELECT data, proxima_manutencao FROM historico",
      ))
      .await
      .unwrap()
      .unwrap();

    assert_eq!(row.try_get::<String>("", "data").unwrap(), "2024-01-05");
    assert_eq!(
      row.try_get::<String>("", "proxima_manutencao").unwrap(),
      "2024-12-31"
    );
  }

  #[tokio::test]
  async fn test_unknown_equipment() {
    let db = setup_test_db().await;
    let sv = History::new(&db);

    let result = sv.create(99, new_history("15/03/2024", "15/03/2025")).await;

    assert!(matches!(result, Err(Error::NotFound)));
    assert_eq!(sv.count().await.unwrap(), 0);
  }

  #[tokio::test]
  async fn test_invalid_dates() {
    let db = setup_test_db().await;
    let equipment = Equipment::new(&db)
      .create(new_equipment("PAT-1", "Balança", "B100"))
      .await
      .unwrap();
    let sv = History::new(&db);

    let result =
      sv.create(equipment.id, new_history("31/02/2024", "15/03/2025")).await;
    assert!(matches!(result, Err(Error::InvalidDate)));

    let result =
      sv.create(equipment.id, new_history("15/03/2024", "2025-03-15")).await;
    assert!(matches!(result, Err(Error::InvalidDate)));

    assert_eq!(sv.count().await.unwrap(), 0);
  }

  #[tokio::test]
  async fn test_list_scoped_to_equipment() {
    let db = setup_test_db().await;
    let equipment = Equipment::new(&db);
    let first = equipment
      .create(new_equipment("PAT-1", "Balança", "B100"))
      .await
      .unwrap();
    let second = equipment
      .create(new_equipment("PAT-2", "Estufa", "E4"))
      .await
      .unwrap();
    let sv = History::new(&db);

    assert!(sv.by_equipment(first.id).await.unwrap().is_empty());

    sv.create(first.id, new_history("01/02/2024", "01/02/2025"))
      .await
      .unwrap();
    sv.create(second.id, new_history("02/02/2024", "02/02/2025"))
      .await
      .unwrap();
    sv.create(first.id, new_history("01/01/2024", "01/01/2025"))
      .await
      .unwrap();

    let entries = sv.by_equipment(first.id).await.unwrap();
    let dates: Vec<_> = entries.iter().map(|e| date::display(e.data)).collect();
    assert_eq!(dates, ["01/02/2024", "01/01/2024"]);
  }
}
