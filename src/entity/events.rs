//! Evaluation event entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub event_type: String,
    pub period_id: i64,
    pub proker_id: Option<i64>,
    pub start_date: i64,
    pub end_date: i64,
    pub is_open: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::periods::Entity",
        from = "Column::PeriodId",
        to = "super::periods::Column::Id"
    )]
    Period,
    #[sea_orm(
        belongs_to = "super::prokers::Entity",
        from = "Column::ProkerId",
        to = "super::prokers::Column::Id"
    )]
    Proker,
    #[sea_orm(has_many = "super::indicator_snapshots::Entity")]
    IndicatorSnapshots,
    #[sea_orm(has_many = "super::evaluations::Entity")]
    Evaluations,
}

impl Related<super::periods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Period.def()
    }
}

impl Related<super::prokers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proker.def()
    }
}

impl Related<super::indicator_snapshots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IndicatorSnapshots.def()
    }
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_event(self) -> crate::models::events::entities::Event {
        use crate::models::events::entities::{Event, EventType};
        use chrono::{DateTime, Utc};

        Event {
            id: self.id,
            name: self.name,
            event_type: self
                .event_type
                .parse::<EventType>()
                .unwrap_or(EventType::Periodic),
            period_id: self.period_id,
            proker_id: self.proker_id,
            start_date: DateTime::<Utc>::from_timestamp(self.start_date, 0).unwrap_or_default(),
            end_date: DateTime::<Utc>::from_timestamp(self.end_date, 0).unwrap_or_default(),
            is_open: self.is_open,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
