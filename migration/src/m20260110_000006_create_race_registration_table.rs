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
                    .table(RaceRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(RaceRegistration::Id))
                    .col(integer(RaceRegistration::RaceId))
                    .col(integer(RaceRegistration::PilotId))
                    .col(string_len(RaceRegistration::Status, 20))
                    .col(text_null(RaceRegistration::Excuse))
                    .col(
                        timestamp(RaceRegistration::RespondedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_registration_race_id")
                            .from(RaceRegistration::Table, RaceRegistration::RaceId)
                            .to(Race::Table, Race::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_registration_pilot_id")
                            .from(RaceRegistration::Table, RaceRegistration::PilotId)
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
            .drop_table(Table::drop().table(RaceRegistration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RaceRegistration {
    Table,
    Id,
    RaceId,
    PilotId,
    Status,
    Excuse,
    RespondedAt,
}
