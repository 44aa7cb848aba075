//! Proker (program kerja) entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prokers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub division_id: i64,
    pub period_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::divisions::Entity",
        from = "Column::DivisionId",
        to = "super::divisions::Column::Id"
    )]
    Division,
    #[sea_orm(
        belongs_to = "super::periods::Entity",
        from = "Column::PeriodId",
        to = "super::periods::Column::Id"
    )]
    Period,
    #[sea_orm(has_many = "super::panitia::Entity")]
    Panitia,
}

impl Related<super::divisions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl Related<super::periods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Period.def()
    }
}

impl Related<super::panitia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Panitia.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_proker(self) -> crate::models::prokers::entities::Proker {
        use chrono::{DateTime, Utc};

        crate::models::prokers::entities::Proker {
            id: self.id,
            name: self.name,
            division_id: self.division_id,
            period_id: self.period_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
