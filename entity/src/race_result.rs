use sea_orm::entity::prelude::*;

use crate::enums::Absence;

/// One classified line of a race.
///
/// `team_id` is a snapshot of the team the pilot scored for at the time the
/// result was recorded; later roster moves must not rewrite it. `points`
/// carries the settled value, so tribunal penalties are mirrored here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "race_result")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub race_id: i32,
    pub pilot_id: i32,
    pub team_id: Option<i32>,
    pub position: i32,
    pub points: f64,
    pub fastest_lap: bool,
    pub driver_of_the_day: bool,
    pub fan_favorite: bool,
    pub dnf: bool,
    pub dsq: bool,
    pub absence: Option<Absence>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::race::Entity",
        from = "Column::RaceId",
        to = "super::race::Column::Id"
    )]
    Race,
    #[sea_orm(
        belongs_to = "super::pilot::Entity",
        from = "Column::PilotId",
        to = "super::pilot::Column::Id"
    )]
    Pilot,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
}

impl Related<super::race::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl Related<super::pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
