//! Evaluation score entity
//!
//! One integer score in [1,5] per (evaluation, indicator snapshot). Unique
//! on that pair so a concurrent duplicate submission fails at the store.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub evaluation_id: i64,
    pub indicator_snapshot_id: i64,
    pub score: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluations::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluations::Column::Id"
    )]
    Evaluation,
    #[sea_orm(
        belongs_to = "super::indicator_snapshots::Entity",
        from = "Column::IndicatorSnapshotId",
        to = "super::indicator_snapshots::Column::Id"
    )]
    IndicatorSnapshot,
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl Related<super::indicator_snapshots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IndicatorSnapshot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
