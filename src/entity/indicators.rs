//! Evaluation indicator entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "indicators")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::indicator_snapshots::Entity")]
    IndicatorSnapshots,
}

impl Related<super::indicator_snapshots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IndicatorSnapshots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_indicator(self) -> crate::models::indicators::entities::Indicator {
        use crate::models::indicators::entities::{Indicator, IndicatorCategory};
        use chrono::{DateTime, Utc};

        Indicator {
            id: self.id,
            name: self.name,
            category: self
                .category
                .parse::<IndicatorCategory>()
                .unwrap_or(IndicatorCategory::Other),
            is_active: self.is_active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
