//! History entity - one row per maintenance event

use sea_orm::entity::prelude::*;

use super::equipment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "historico")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub equipamento_id: i32,
  pub data: Date,
  pub tipo_servico: String,
  pub responsavel_execucao: String,
  pub responsavel_analise: String,
  /// Next maintenance due date
  pub proxima_manutencao: Date,
  pub local_uso: String,
  pub historico_detalhado: Option<String>,
  pub observacoes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "equipment::Entity",
    from = "Column::EquipamentoId",
    to = "equipment::Column::Id"
  )]
  Equipment,
}

impl Related<equipment::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Equipment.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
