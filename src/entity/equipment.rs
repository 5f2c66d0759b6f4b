//! Equipment entity - one row per physical asset

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "equipamentos")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  /// Asset tag, unique across all equipment
  #[sea_orm(unique)]
  pub patrimonio: String,
  pub nome: String,
  pub modelo: String,
  pub marca: String,
  pub fabricante: String,
  pub numero_serie: String,
  pub historico_detalhado: Option<String>,
  pub observacoes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::history::Entity")]
  History,
}

impl Related<super::history::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::History.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
