use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct SeletivaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeletivaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pilot's qualifying lap, replacing any previous one
    ///
    /// Only the latest lap counts for placement, so re-recording a time
    /// overwrites the existing entry rather than adding a second.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored entry
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        pilot_id: i32,
        time_ms: i64,
        time_display: String,
    ) -> Result<entity::seletiva_entry::Model, DbErr> {
        let existing = entity::prelude::SeletivaEntry::find()
            .filter(entity::seletiva_entry::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut active: entity::seletiva_entry::ActiveModel = existing.into();
            active.time_ms = ActiveValue::Set(time_ms);
            active.time_display = ActiveValue::Set(time_display);
            active.recorded_at = ActiveValue::Set(Utc::now());

            active.update(self.db).await
        } else {
            entity::seletiva_entry::ActiveModel {
                pilot_id: ActiveValue::Set(pilot_id),
                time_ms: ActiveValue::Set(time_ms),
                time_display: ActiveValue::Set(time_display),
                recorded_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await
        }
    }

    /// Gets all entries ranked fastest first
    pub async fn get_ranked(&self) -> Result<Vec<entity::seletiva_entry::Model>, DbErr> {
        entity::prelude::SeletivaEntry::find()
            .order_by_asc(entity::seletiva_entry::Column::TimeMs)
            .all(self.db)
            .await
    }

    /// Removes one pilot's entry from the board
    pub async fn delete_by_pilot(&self, pilot_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::SeletivaEntry::delete_many()
            .filter(entity::seletiva_entry::Column::PilotId.eq(pilot_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
