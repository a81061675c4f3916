use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260110_000004_create_pilot_table::Pilot, m20260110_000005_create_race_table::Race};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Protest::Table)
                    .if_not_exists()
                    .col(pk_auto(Protest::Id))
                    .col(integer(Protest::RaceId))
                    .col(integer(Protest::AccuserId))
                    .col(integer(Protest::AccusedId))
                    .col(string_null(Protest::VideoUrl))
                    .col(string_len_null(Protest::MinuteMark, 50))
                    .col(text_null(Protest::Description))
                    .col(string_null(Protest::DefenseVideoUrl))
                    .col(text_null(Protest::DefenseArgument))
                    .col(string_len(Protest::Status, 20).default("AWAITING_DEFENSE"))
                    .col(string_len_null(Protest::Verdict, 20))
                    .col(text_null(Protest::VerdictReason))
                    .col(timestamp(Protest::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_null(Protest::ClosedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_protest_race_id")
                            .from(Protest::Table, Protest::RaceId)
                            .to(Race::Table, Race::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_protest_accuser_id")
                            .from(Protest::Table, Protest::AccuserId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_protest_accused_id")
                            .from(Protest::Table, Protest::AccusedId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Protest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Protest {
    Table,
    Id,
    RaceId,
    AccuserId,
    AccusedId,
    VideoUrl,
    MinuteMark,
    Description,
    DefenseVideoUrl,
    DefenseArgument,
    Status,
    Verdict,
    VerdictReason,
    CreatedAt,
    ClosedAt,
}
