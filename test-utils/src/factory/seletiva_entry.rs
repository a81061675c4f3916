//! Seletiva entry factory for creating time-trial laps.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SeletivaEntryFactory<'a> {
    db: &'a DatabaseConnection,
    pilot_id: i32,
    time_ms: i64,
    time_display: String,
}

impl<'a> SeletivaEntryFactory<'a> {
    /// Creates a new SeletivaEntryFactory defaulting to a 1:35.800 lap.
    pub fn new(db: &'a DatabaseConnection, pilot_id: i32) -> Self {
        Self {
            db,
            pilot_id,
            time_ms: 95_800,
            time_display: "1:35.800".to_string(),
        }
    }

    pub fn time_ms(mut self, time_ms: i64) -> Self {
        self.time_ms = time_ms;
        self
    }

    pub fn time_display(mut self, time_display: impl Into<String>) -> Self {
        self.time_display = time_display.into();
        self
    }

    /// Builds and inserts the entry into the database.
    pub async fn build(self) -> Result<entity::seletiva_entry::Model, DbErr> {
        entity::seletiva_entry::ActiveModel {
            pilot_id: ActiveValue::Set(self.pilot_id),
            time_ms: ActiveValue::Set(self.time_ms),
            time_display: ActiveValue::Set(self.time_display),
            recorded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a seletiva entry with the default lap for the given pilot.
pub async fn create_seletiva_entry(
    db: &DatabaseConnection,
    pilot_id: i32,
) -> Result<entity::seletiva_entry::Model, DbErr> {
    SeletivaEntryFactory::new(db, pilot_id).build().await
}
