use sea_orm_migration::prelude::*;

use super::require_columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Equipamentos::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Equipamentos::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(Equipamentos::Patrimonio)
              .string()
              .not_null()
              .unique_key(),
          )
          .col(ColumnDef::new(Equipamentos::Nome).string().not_null())
          .col(ColumnDef::new(Equipamentos::Modelo).string().not_null())
          .col(ColumnDef::new(Equipamentos::Marca).string().not_null())
          .col(ColumnDef::new(Equipamentos::Fabricante).string().not_null())
          .col(ColumnDef::new(Equipamentos::NumeroSerie).string().not_null())
          .to_owned(),
      )
      .await?;

    require_columns(
      manager,
      Equipamentos::Table,
      &[
        Equipamentos::Id,
        Equipamentos::Patrimonio,
        Equipamentos::Nome,
        Equipamentos::Modelo,
        Equipamentos::Marca,
        Equipamentos::Fabricante,
        Equipamentos::NumeroSerie,
      ],
    )
    .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Equipamentos::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum Equipamentos {
  Table,
  Id,
  Patrimonio,
  Nome,
  Modelo,
  Marca,
  Fabricante,
  NumeroSerie,
  HistoricoDetalhado,
  Observacoes,
}
