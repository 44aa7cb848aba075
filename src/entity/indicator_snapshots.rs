//! Indicator snapshot entity
//!
//! An immutable copy-by-reference of one indicator into one event, fixed at
//! event creation so later indicator edits never change a finished event.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "indicator_snapshots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub event_id: i64,
    pub indicator_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::indicators::Entity",
        from = "Column::IndicatorId",
        to = "super::indicators::Column::Id"
    )]
    Indicator,
    #[sea_orm(has_many = "super::evaluation_scores::Entity")]
    EvaluationScores,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Indicator.def()
    }
}

impl Related<super::evaluation_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationScores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
