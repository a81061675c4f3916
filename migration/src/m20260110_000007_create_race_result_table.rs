use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000002_create_team_table::Team, m20260110_000004_create_pilot_table::Pilot,
    m20260110_000005_create_race_table::Race,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RaceResult::Table)
                    .if_not_exists()
                    .col(pk_auto(RaceResult::Id))
                    .col(integer(RaceResult::RaceId))
                    .col(integer(RaceResult::PilotId))
                    .col(integer_null(RaceResult::TeamId))
                    .col(integer(RaceResult::Position).default(0))
                    .col(double(RaceResult::Points).default(0.0))
                    .col(boolean(RaceResult::FastestLap).default(false))
                    .col(boolean(RaceResult::DriverOfTheDay).default(false))
                    .col(boolean(RaceResult::FanFavorite).default(false))
                    .col(boolean(RaceResult::Dnf).default(false))
                    .col(boolean(RaceResult::Dsq).default(false))
                    .col(string_len_null(RaceResult::Absence, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_result_race_id")
                            .from(RaceResult::Table, RaceResult::RaceId)
                            .to(Race::Table, Race::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_result_pilot_id")
                            .from(RaceResult::Table, RaceResult::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_result_team_id")
                            .from(RaceResult::Table, RaceResult::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RaceResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RaceResult {
    Table,
    Id,
    RaceId,
    PilotId,
    TeamId,
    Position,
    Points,
    FastestLap,
    DriverOfTheDay,
    FanFavorite,
    Dnf,
    Dsq,
    Absence,
}
