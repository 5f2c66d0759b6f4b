use sea_orm_migration::prelude::*;

use super::{
  m20250301_000001_create_equipamentos::Equipamentos,
  m20250301_000002_create_historico::Historico,
};

/// Free-text notes on both tables. Databases created before these columns
/// existed already carry the tables, so every column is guarded.
fn notes_columns() -> Vec<(String, String)> {
  vec![
    (
      Equipamentos::Table.to_string(),
      Equipamentos::HistoricoDetalhado.to_string(),
    ),
    (Equipamentos::Table.to_string(), Equipamentos::Observacoes.to_string()),
    (Historico::Table.to_string(), Historico::HistoricoDetalhado.to_string()),
    (Historico::Table.to_string(), Historico::Observacoes.to_string()),
  ]
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    for (table, column) in notes_columns() {
      if manager.has_column(&table, &column).await? {
        continue;
      }

      manager
        .alter_table(
          Table::alter()
            .table(Alias::new(&table))
            .add_column(ColumnDef::new(Alias::new(&column)).text().null())
            .to_owned(),
        )
        .await?;
    }

    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    for (table, column) in notes_columns() {
      if !manager.has_column(&table, &column).await? {
        continue;
      }

      manager
        .alter_table(
          Table::alter()
            .table(Alias::new(&table))
            .drop_column(Alias::new(&column))
            .to_owned(),
        )
        .await?;
    }

    Ok(())
  }
}
