//! Protest factory for creating disciplinary cases and committee votes.

use chrono::Utc;
use entity::enums::{ProtestStatus, Verdict};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ProtestFactory<'a> {
    db: &'a DatabaseConnection,
    race_id: i32,
    accuser_id: i32,
    accused_id: i32,
    description: Option<String>,
    status: ProtestStatus,
    verdict: Option<Verdict>,
}

impl<'a> ProtestFactory<'a> {
    /// Creates a new ProtestFactory defaulting to a freshly opened case.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `race_id` - Race the incident happened in
    /// - `accuser_id` - Pilot filing the protest
    /// - `accused_id` - Pilot the protest is against
    pub fn new(
        db: &'a DatabaseConnection,
        race_id: i32,
        accuser_id: i32,
        accused_id: i32,
    ) -> Self {
        Self {
            db,
            race_id,
            accuser_id,
            accused_id,
            description: Some("Contact at turn 3".to_string()),
            status: ProtestStatus::AwaitingDefense,
            verdict: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: ProtestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    /// Builds and inserts the protest into the database.
    pub async fn build(self) -> Result<entity::protest::Model, DbErr> {
        let closed_at = matches!(self.status, ProtestStatus::Closed).then(Utc::now);

        entity::protest::ActiveModel {
            race_id: ActiveValue::Set(self.race_id),
            accuser_id: ActiveValue::Set(self.accuser_id),
            accused_id: ActiveValue::Set(self.accused_id),
            video_url: ActiveValue::Set(None),
            minute_mark: ActiveValue::Set(None),
            description: ActiveValue::Set(self.description),
            defense_video_url: ActiveValue::Set(None),
            defense_argument: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            verdict: ActiveValue::Set(self.verdict),
            verdict_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(closed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open protest between the given pilots.
pub async fn create_protest(
    db: &DatabaseConnection,
    race_id: i32,
    accuser_id: i32,
    accused_id: i32,
) -> Result<entity::protest::Model, DbErr> {
    ProtestFactory::new(db, race_id, accuser_id, accused_id)
        .build()
        .await
}

/// Records a committee vote on a protest.
pub async fn create_vote(
    db: &DatabaseConnection,
    protest_id: i32,
    admin_id: i32,
    choice: Verdict,
) -> Result<entity::protest_vote::Model, DbErr> {
    entity::protest_vote::ActiveModel {
        protest_id: ActiveValue::Set(protest_id),
        admin_id: ActiveValue::Set(admin_id),
        choice: ActiveValue::Set(choice),
        ..Default::default()
    }
    .insert(db)
    .await
}
