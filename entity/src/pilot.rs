use sea_orm::entity::prelude::*;

use crate::enums::Grid;

/// Competitive profile attached to a user account.
///
/// `cnh_points` is the disciplinary balance; a pilot whose balance reaches
/// zero or below is banned from track activity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pilot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub real_name: String,
    pub photo_url: Option<String>,
    pub grid: Grid,
    pub phone: Option<String>,
    pub cnh_points: i32,
    pub warnings: i32,
    pub team_id: Option<i32>,
}

impl Model {
    pub fn is_banned(&self) -> bool {
        self.cnh_points <= 0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
    #[sea_orm(has_many = "super::race_result::Entity")]
    RaceResult,
    #[sea_orm(has_many = "super::race_registration::Entity")]
    RaceRegistration,
    #[sea_orm(has_many = "super::seletiva_entry::Entity")]
    SeletivaEntry,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::race_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaceResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
