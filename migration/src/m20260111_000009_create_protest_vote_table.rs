use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_user_table::User, m20260111_000008_create_protest_table::Protest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProtestVote::Table)
                    .if_not_exists()
                    .col(pk_auto(ProtestVote::Id))
                    .col(integer(ProtestVote::ProtestId))
                    .col(integer(ProtestVote::AdminId))
                    .col(string_len(ProtestVote::Choice, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_protest_vote_protest_id")
                            .from(ProtestVote::Table, ProtestVote::ProtestId)
                            .to(Protest::Table, Protest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_protest_vote_admin_id")
                            .from(ProtestVote::Table, ProtestVote::AdminId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProtestVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProtestVote {
    Table,
    Id,
    ProtestId,
    AdminId,
    Choice,
}
