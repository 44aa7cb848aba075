//! Evaluation assignment entity
//!
//! One directed (evaluator, evaluatee) pair per event. Unique on the triple;
//! generated in bulk by the assignment generator.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub evaluator_id: i64,
    pub evaluatee_id: i64,
    pub event_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::EvaluatorId",
        to = "super::users::Column::Id"
    )]
    Evaluator,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::EvaluateeId",
        to = "super::users::Column::Id"
    )]
    Evaluatee,
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id"
    )]
    Event,
    #[sea_orm(has_many = "super::evaluation_scores::Entity")]
    EvaluationScores,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::evaluation_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationScores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_record(self) -> crate::models::evaluations::entities::EvaluationRecord {
        crate::models::evaluations::entities::EvaluationRecord {
            id: self.id,
            evaluator_id: self.evaluator_id,
            evaluatee_id: self.evaluatee_id,
            event_id: self.event_id,
            feedback: self.feedback,
        }
    }
}
