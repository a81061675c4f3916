//! Race factory for creating test races.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use entity::enums::{Grid, RaceKind, RaceStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RaceFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    gp_name: String,
    track: String,
    race_date: Option<NaiveDate>,
    grid: Grid,
    status: RaceStatus,
    kind: RaceKind,
}

impl<'a> RaceFactory<'a> {
    /// Creates a new RaceFactory with default values.
    ///
    /// Defaults:
    /// - gp_name: `"GP {id}"` where id is auto-incremented
    /// - grid: `Grid::Elite`, status `Scheduled`, kind `Normal`
    /// - race_date: 2026-03-01
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `season_id` - Season the race belongs to, created beforehand
    pub fn new(db: &'a DatabaseConnection, season_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            season_id,
            gp_name: format!("GP {}", id),
            track: format!("Track {}", id),
            race_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            grid: Grid::Elite,
            status: RaceStatus::Scheduled,
            kind: RaceKind::Normal,
        }
    }

    pub fn gp_name(mut self, gp_name: impl Into<String>) -> Self {
        self.gp_name = gp_name.into();
        self
    }

    pub fn race_date(mut self, race_date: NaiveDate) -> Self {
        self.race_date = Some(race_date);
        self
    }

    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    pub fn status(mut self, status: RaceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn kind(mut self, kind: RaceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builds and inserts the race entity into the database.
    pub async fn build(self) -> Result<entity::race::Model, DbErr> {
        entity::race::ActiveModel {
            season_id: ActiveValue::Set(self.season_id),
            gp_name: ActiveValue::Set(self.gp_name),
            track: ActiveValue::Set(self.track),
            race_date: ActiveValue::Set(self.race_date),
            grid: ActiveValue::Set(self.grid),
            status: ActiveValue::Set(self.status),
            kind: ActiveValue::Set(self.kind),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled race with default values in the given season.
pub async fn create_race(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<entity::race::Model, DbErr> {
    RaceFactory::new(db, season_id).build().await
}
