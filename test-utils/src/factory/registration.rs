//! Registration factory for creating pre-race check-in answers.

use chrono::Utc;
use entity::enums::RegistrationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    race_id: i32,
    pilot_id: i32,
    status: RegistrationStatus,
    excuse: Option<String>,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory defaulting to a confirmed check-in.
    pub fn new(db: &'a DatabaseConnection, race_id: i32, pilot_id: i32) -> Self {
        Self {
            db,
            race_id,
            pilot_id,
            status: RegistrationStatus::Confirmed,
            excuse: None,
        }
    }

    pub fn status(mut self, status: RegistrationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn excuse(mut self, excuse: impl Into<String>) -> Self {
        self.excuse = Some(excuse.into());
        self
    }

    /// Builds and inserts the registration into the database.
    pub async fn build(self) -> Result<entity::race_registration::Model, DbErr> {
        entity::race_registration::ActiveModel {
            race_id: ActiveValue::Set(self.race_id),
            pilot_id: ActiveValue::Set(self.pilot_id),
            status: ActiveValue::Set(self.status),
            excuse: ActiveValue::Set(self.excuse),
            responded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed check-in for the given race and pilot.
pub async fn create_registration(
    db: &DatabaseConnection,
    race_id: i32,
    pilot_id: i32,
) -> Result<entity::race_registration::Model, DbErr> {
    RegistrationFactory::new(db, race_id, pilot_id).build().await
}
