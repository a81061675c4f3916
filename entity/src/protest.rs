use sea_orm::entity::prelude::*;

use crate::enums::{ProtestStatus, Verdict};

/// A dispute filed by one pilot against another over a race incident,
/// adjudicated by committee vote. The stored verdict is what the settlement
/// engine refunds from when a closed case is reopened or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "protest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub race_id: i32,
    pub accuser_id: i32,
    pub accused_id: i32,
    pub video_url: Option<String>,
    pub minute_mark: Option<String>,
    pub description: Option<String>,
    pub defense_video_url: Option<String>,
    pub defense_argument: Option<String>,
    pub status: ProtestStatus,
    pub verdict: Option<Verdict>,
    pub verdict_reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub closed_at: Option<DateTimeUtc>,
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
        from = "Column::AccuserId",
        to = "super::pilot::Column::Id"
    )]
    Accuser,
    #[sea_orm(
        belongs_to = "super::pilot::Entity",
        from = "Column::AccusedId",
        to = "super::pilot::Column::Id"
    )]
    Accused,
    #[sea_orm(has_many = "super::protest_vote::Entity")]
    ProtestVote,
}

impl Related<super::race::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl Related<super::protest_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProtestVote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
