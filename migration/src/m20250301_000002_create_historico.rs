use sea_orm_migration::prelude::*;

use super::{
  m20250301_000001_create_equipamentos::Equipamentos, require_columns,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Historico::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Historico::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Historico::EquipamentoId).integer().not_null())
          .col(ColumnDef::new(Historico::Data).date().not_null())
          .col(ColumnDef::new(Historico::TipoServico).string().not_null())
          .col(
            ColumnDef::new(Historico::ResponsavelExecucao).string().not_null(),
          )
          .col(
            ColumnDef::new(Historico::ResponsavelAnalise).string().not_null(),
          )
          .col(ColumnDef::new(Historico::ProximaManutencao).date().not_null())
          .col(ColumnDef::new(Historico::LocalUso).string().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_historico_equipamento")
              .from(Historico::Table, Historico::EquipamentoId)
              .to(Equipamentos::Table, Equipamentos::Id),
          )
          .to_owned(),
      )
      .await?;

    require_columns(
      manager,
      Historico::Table,
      &[
        Historico::Id,
        Historico::EquipamentoId,
        Historico::Data,
        Historico::TipoServico,
        Historico::ResponsavelExecucao,
        Historico::ResponsavelAnalise,
        Historico::ProximaManutencao,
        Historico::LocalUso,
      ],
    )
    .await?;

    manager
      .create_index(
        Index::create()
          .if_not_exists()
          .name("idx_historico_equipamento")
          .table(Historico::Table)
          .col(Historico::EquipamentoId)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Historico::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Historico {
  Table,
  Id,
  EquipamentoId,
  Data,
  TipoServico,
  ResponsavelExecucao,
  ResponsavelAnalise,
  ProximaManutencao,
  LocalUso,
  HistoricoDetalhado,
  Observacoes,
}
