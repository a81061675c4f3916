use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000003_create_season_table::Season;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Race::Table)
                    .if_not_exists()
                    .col(pk_auto(Race::Id))
                    .col(integer(Race::SeasonId))
                    .col(string(Race::GpName))
                    .col(string(Race::Track))
                    .col(date_null(Race::RaceDate))
                    .col(string_len(Race::Grid, 20))
                    .col(string_len(Race::Status, 20).default("SCHEDULED"))
                    .col(string_len(Race::Kind, 20).default("NORMAL"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_season_id")
                            .from(Race::Table, Race::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Race::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Race {
    Table,
    Id,
    SeasonId,
    GpName,
    Track,
    RaceDate,
    Grid,
    Status,
    Kind,
}
