//! Season factory for creating test championship seasons.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    active: bool,
    start_date: NaiveDate,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Season {id}"` where id is auto-incremented
    /// - active: true
    /// - start_date: 2026-01-10
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Season {}", id),
            active: true,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Builds and inserts the season entity into the database.
    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            name: ActiveValue::Set(self.name),
            active: ActiveValue::Set(self.active),
            start_date: ActiveValue::Set(self.start_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active season with default values.
pub async fn create_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}
