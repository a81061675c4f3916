use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000004_create_pilot_table::Pilot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeletivaEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(SeletivaEntry::Id))
                    .col(integer(SeletivaEntry::PilotId))
                    .col(big_integer(SeletivaEntry::TimeMs))
                    .col(string_len(SeletivaEntry::TimeDisplay, 20))
                    .col(timestamp(SeletivaEntry::RecordedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seletiva_entry_pilot_id")
                            .from(SeletivaEntry::Table, SeletivaEntry::PilotId)
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
            .drop_table(Table::drop().table(SeletivaEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeletivaEntry {
    Table,
    Id,
    PilotId,
    TimeMs,
    TimeDisplay,
    RecordedAt,
}
