use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260110_000001_create_user_table::User, m20260110_000002_create_team_table::Team};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pilot::Table)
                    .if_not_exists()
                    .col(pk_auto(Pilot::Id))
                    .col(integer(Pilot::UserId))
                    .col(string_len(Pilot::Nickname, 50))
                    .col(string_len(Pilot::RealName, 100))
                    .col(string_null(Pilot::PhotoUrl))
                    .col(string_len(Pilot::Grid, 20))
                    .col(string_len_null(Pilot::Phone, 20))
                    .col(integer(Pilot::CnhPoints).default(25))
                    .col(integer(Pilot::Warnings).default(0))
                    .col(integer_null(Pilot::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pilot_user_id")
                            .from(Pilot::Table, Pilot::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pilot_team_id")
                            .from(Pilot::Table, Pilot::TeamId)
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
            .drop_table(Table::drop().table(Pilot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pilot {
    Table,
    Id,
    UserId,
    Nickname,
    RealName,
    PhotoUrl,
    Grid,
    Phone,
    CnhPoints,
    Warnings,
    TeamId,
}
