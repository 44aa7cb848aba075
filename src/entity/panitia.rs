//! Panitia (proker committee membership) entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "panitia")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub proker_id: i64,
    pub user_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::prokers::Entity",
        from = "Column::ProkerId",
        to = "super::prokers::Column::Id"
    )]
    Proker,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::prokers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proker.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
