use sea_orm::entity::prelude::*;

use crate::enums::{Grid, RaceKind, RaceStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "race")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub season_id: i32,
    pub gp_name: String,
    pub track: String,
    pub race_date: Option<Date>,
    pub grid: Grid,
    pub status: RaceStatus,
    pub kind: RaceKind,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id"
    )]
    Season,
    #[sea_orm(has_many = "super::race_result::Entity")]
    RaceResult,
    #[sea_orm(has_many = "super::race_registration::Entity")]
    RaceRegistration,
    #[sea_orm(has_many = "super::protest::Entity")]
    Protest,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::race_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaceResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
