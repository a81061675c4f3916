use sea_orm::entity::prelude::*;

use crate::enums::Grid;

/// A team competing in one grid. Teams with race history are archived
/// (`active = false`) instead of deleted so past standings stay intact.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub grid: Grid,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pilot::Entity")]
    Pilot,
    #[sea_orm(has_many = "super::race_result::Entity")]
    RaceResult,
}

impl Related<super::pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl Related<super::race_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaceResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
