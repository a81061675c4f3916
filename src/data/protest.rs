use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::{ProtestStatus, Verdict};

pub struct OpenProtestParams {
    pub race_id: i32,
    pub accuser_id: i32,
    pub accused_id: i32,
    pub video_url: Option<String>,
    pub minute_mark: Option<String>,
    pub description: Option<String>,
}

pub struct ProtestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProtestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a protest against another pilot's racecraft
    ///
    /// # Returns
    /// - `Ok(Model)`: The opened protest, awaiting defense
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: OpenProtestParams) -> Result<entity::protest::Model, DbErr> {
        entity::protest::ActiveModel {
            race_id: ActiveValue::Set(params.race_id),
            accuser_id: ActiveValue::Set(params.accuser_id),
            accused_id: ActiveValue::Set(params.accused_id),
            video_url: ActiveValue::Set(params.video_url),
            minute_mark: ActiveValue::Set(params.minute_mark),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(ProtestStatus::AwaitingDefense),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::protest::Model>, DbErr> {
        entity::prelude::Protest::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::protest::Model>, DbErr> {
        entity::prelude::Protest::find()
            .order_by_desc(entity::protest::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get_by_pilot(&self, pilot_id: i32) -> Result<Vec<entity::protest::Model>, DbErr> {
        entity::prelude::Protest::find()
            .filter(
                entity::protest::Column::AccuserId
                    .eq(pilot_id)
                    .or(entity::protest::Column::AccusedId.eq(pilot_id)),
            )
            .order_by_desc(entity::protest::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn set_defense(
        &self,
        id: i32,
        defense_video_url: Option<String>,
        defense_argument: Option<String>,
    ) -> Result<entity::protest::Model, DbErr> {
        let Some(protest) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Protest {id} not found")));
        };

        let mut active: entity::protest::ActiveModel = protest.into();
        active.defense_video_url = ActiveValue::Set(defense_video_url);
        active.defense_argument = ActiveValue::Set(defense_argument);
        active.status = ActiveValue::Set(ProtestStatus::Voting);

        active.update(self.db).await
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: ProtestStatus,
    ) -> Result<entity::protest::Model, DbErr> {
        let Some(protest) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Protest {id} not found")));
        };

        let mut active: entity::protest::ActiveModel = protest.into();
        active.status = ActiveValue::Set(status);

        active.update(self.db).await
    }

    /// Records the final verdict and closes the protest
    pub async fn close(
        &self,
        id: i32,
        verdict: Verdict,
        verdict_reason: Option<String>,
        closed_at: DateTime<Utc>,
    ) -> Result<entity::protest::Model, DbErr> {
        let Some(protest) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Protest {id} not found")));
        };

        let mut active: entity::protest::ActiveModel = protest.into();
        active.status = ActiveValue::Set(ProtestStatus::Closed);
        active.verdict = ActiveValue::Set(Some(verdict));
        active.verdict_reason = ActiveValue::Set(verdict_reason);
        active.closed_at = ActiveValue::Set(Some(closed_at));

        active.update(self.db).await
    }

    /// Clears the verdict and returns the protest to the voting stage
    pub async fn reopen(&self, id: i32) -> Result<entity::protest::Model, DbErr> {
        let Some(protest) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Protest {id} not found")));
        };

        let mut active: entity::protest::ActiveModel = protest.into();
        active.status = ActiveValue::Set(ProtestStatus::Voting);
        active.verdict = ActiveValue::Set(None);
        active.verdict_reason = ActiveValue::Set(None);
        active.closed_at = ActiveValue::Set(None);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Protest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records or replaces an admin's vote on a protest
    pub async fn upsert_vote(
        &self,
        protest_id: i32,
        admin_id: i32,
        choice: Verdict,
    ) -> Result<entity::protest_vote::Model, DbErr> {
        let existing = entity::prelude::ProtestVote::find()
            .filter(entity::protest_vote::Column::ProtestId.eq(protest_id))
            .filter(entity::protest_vote::Column::AdminId.eq(admin_id))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut active: entity::protest_vote::ActiveModel = existing.into();
            active.choice = ActiveValue::Set(choice);

            active.update(self.db).await
        } else {
            entity::protest_vote::ActiveModel {
                protest_id: ActiveValue::Set(protest_id),
                admin_id: ActiveValue::Set(admin_id),
                choice: ActiveValue::Set(choice),
                ..Default::default()
            }
            .insert(self.db)
            .await
        }
    }

    pub async fn get_votes(
        &self,
        protest_id: i32,
    ) -> Result<Vec<entity::protest_vote::Model>, DbErr> {
        entity::prelude::ProtestVote::find()
            .filter(entity::protest_vote::Column::ProtestId.eq(protest_id))
            .all(self.db)
            .await
    }
}
