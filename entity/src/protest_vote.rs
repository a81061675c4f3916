use sea_orm::entity::prelude::*;

use crate::enums::Verdict;

/// One commissioner's vote on a protest. An admin gets a single vote per
/// case, updatable until the case is closed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "protest_vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub protest_id: i32,
    pub admin_id: i32,
    pub choice: Verdict,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::protest::Entity",
        from = "Column::ProtestId",
        to = "super::protest::Column::Id"
    )]
    Protest,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AdminId",
        to = "super::user::Column::Id"
    )]
    Admin,
}

impl Related<super::protest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Protest.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
