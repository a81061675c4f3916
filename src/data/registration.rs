use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::RegistrationStatus;

pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records or replaces a pilot's check-in response for a race
    ///
    /// A pilot may change their mind up until results are saved, so an
    /// existing response is overwritten rather than duplicated.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored response
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        race_id: i32,
        pilot_id: i32,
        status: RegistrationStatus,
        excuse: Option<String>,
    ) -> Result<entity::race_registration::Model, DbErr> {
        let existing = self.find_by_race_and_pilot(race_id, pilot_id).await?;

        if let Some(existing) = existing {
            let mut active: entity::race_registration::ActiveModel = existing.into();
            active.status = ActiveValue::Set(status);
            active.excuse = ActiveValue::Set(excuse);
            active.responded_at = ActiveValue::Set(Utc::now());

            active.update(self.db).await
        } else {
            entity::race_registration::ActiveModel {
                race_id: ActiveValue::Set(race_id),
                pilot_id: ActiveValue::Set(pilot_id),
                status: ActiveValue::Set(status),
                excuse: ActiveValue::Set(excuse),
                responded_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await
        }
    }

    pub async fn find_by_race_and_pilot(
        &self,
        race_id: i32,
        pilot_id: i32,
    ) -> Result<Option<entity::race_registration::Model>, DbErr> {
        entity::prelude::RaceRegistration::find()
            .filter(entity::race_registration::Column::RaceId.eq(race_id))
            .filter(entity::race_registration::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_race(
        &self,
        race_id: i32,
    ) -> Result<Vec<entity::race_registration::Model>, DbErr> {
        entity::prelude::RaceRegistration::find()
            .filter(entity::race_registration::Column::RaceId.eq(race_id))
            .order_by_asc(entity::race_registration::Column::RespondedAt)
            .all(self.db)
            .await
    }
}
