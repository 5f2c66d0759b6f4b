//! Database migrations using SeaORM

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_equipamentos;
mod m20250301_000002_create_historico;
mod m20250301_000003_add_notes_columns;

/// `CREATE TABLE IF NOT EXISTS` leaves a pre-existing table untouched, so
/// its base columns are checked before anything else relies on them.
async fn require_columns<C: Iden>(
  manager: &SchemaManager<'_>,
  table: C,
  columns: &[C],
) -> Result<(), DbErr> {
  let table = table.to_string();
  for column in columns {
    let column = column.to_string();
    if !manager.has_column(&table, &column).await? {
      return Err(DbErr::Migration(format!(
        "table `{table}` exists without column `{column}`"
      )));
    }
  }
  Ok(())
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20250301_000001_create_equipamentos::Migration),
      Box::new(m20250301_000002_create_historico::Migration),
      Box::new(m20250301_000003_add_notes_columns::Migration),
    ]
  }
}

#[cfg(test)]
mod tests {
  use sea_orm_migration::sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
  };

  use super::*;

  async fn memory_db() -> DatabaseConnection {
    Database::connect("sqlite::memory:").await.unwrap()
  }

  async fn assert_notes_columns(db: &DatabaseConnection) {
    let manager = SchemaManager::new(db);
    for table in ["equipamentos", "historico"] {
      for column in ["historico_detalhado", "observacoes"] {
        assert!(
          manager.has_column(table, column).await.unwrap(),
          "{table}.{column} missing"
        );
      }
    }
  }

  #[tokio::test]
  async fn test_fresh_database() {
    let db = memory_db().await;

    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("equipamentos").await.unwrap());
    assert!(manager.has_table("historico").await.unwrap());
    assert_notes_columns(&db).await;
  }

  #[tokio::test]
  async fn test_up_is_idempotent() {
    let db = memory_db().await;

    Migrator::up(&db, None).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let applied = Migrator::get_applied_migrations(&db).await.unwrap();
    assert_eq!(applied.len(), 3);
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_rejects_table_missing_base_columns() {
    let db = memory_db().await;

    db.execute_unprepared("CREATE TABLE historico (id INTEGER PRIMARY KEY)")
      .await
      .unwrap();

    let err = Migrator::up(&db, None).await.unwrap_err();

    assert!(err.to_string().contains("equipamento_id"), "{err}");
  }

  #[tokio::test]
  async fn test_upgrades_unversioned_database() {
    let db = memory_db().await;

    db.execute_unprepared(
      "CREATE TABLE equipamentos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        patrimonio TEXT UNIQUE,
        nome TEXT,
        modelo TEXT,
        marca TEXT,
        fabricante TEXT,
        numero_serie TEXT
      )",
    )
    .await
    .unwrap();
    db.execute_unprepared(
      "CREATE TABLE historico (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        equipamento_id INTEGER,
        data TEXT,
        tipo_servico TEXT,
        responsavel_execucao TEXT,
        responsavel_analise TEXT,
        proxima_manutencao TEXT,
        local_uso TEXT,
        historico_detalhado TEXT,
        observacoes TEXT,
        FOREIGN KEY(equipamento_id) REFERENCES equipamentos(id)
      )",
    )
    .await
    .unwrap();
    db.execute_unprepared(
      "INSERT INTO equipamentos (patrimonio, nome, modelo, marca, fabricante, numero_serie)
       VALUES ('PAT-1', 'Balança', 'B-100', 'Acme', 'Acme', 'SN1')",
    )
    .await
    .unwrap();

    Migrator::up(&db, None).await.unwrap();

    assert_notes_columns(&db).await;

    let row = db
      .query_one(Statement::from_string(
        DbBackend::Sqlite,
        "SELECT COUNT(*) AS n, observacoes FROM equipamentos",
      ))
      .await
      .unwrap()
      .unwrap();
    assert_eq!(row.try_get::<i32>("", "n").unwrap(), 1);
    assert_eq!(row.try_get::<Option<String>>("", "observacoes").unwrap(), None);
  }
}
