pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_user_table;
mod m20260110_000002_create_team_table;
mod m20260110_000003_create_season_table;
mod m20260110_000004_create_pilot_table;
mod m20260110_000005_create_race_table;
mod m20260110_000006_create_race_registration_table;
mod m20260110_000007_create_race_result_table;
mod m20260111_000008_create_protest_table;
mod m20260111_000009_create_protest_vote_table;
mod m20260111_000010_create_invite_table;
mod m20260111_000011_create_seletiva_entry_table;
mod m20260111_000012_create_news_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_user_table::Migration),
            Box::new(m20260110_000002_create_team_table::Migration),
            Box::new(m20260110_000003_create_season_table::Migration),
            Box::new(m20260110_000004_create_pilot_table::Migration),
            Box::new(m20260110_000005_create_race_table::Migration),
            Box::new(m20260110_000006_create_race_registration_table::Migration),
            Box::new(m20260110_000007_create_race_result_table::Migration),
            Box::new(m20260111_000008_create_protest_table::Migration),
            Box::new(m20260111_000009_create_protest_vote_table::Migration),
            Box::new(m20260111_000010_create_invite_table::Migration),
            Box::new(m20260111_000011_create_seletiva_entry_table::Migration),
            Box::new(m20260111_000012_create_news_table::Migration),
        ]
    }
}
