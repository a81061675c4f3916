//! Pilot factory for creating test pilot profiles.

use crate::factory::helpers::next_id;
use entity::enums::Grid;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default license balance a pilot starts with.
const DEFAULT_CNH: i32 = 25;

pub struct PilotFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    nickname: String,
    real_name: String,
    grid: Grid,
    cnh_points: i32,
    warnings: i32,
    team_id: Option<i32>,
}

impl<'a> PilotFactory<'a> {
    /// Creates a new PilotFactory with default values.
    ///
    /// Defaults:
    /// - nickname: `"Pilot {id}"` where id is auto-incremented
    /// - grid: `Grid::Elite`
    /// - cnh_points: 25, warnings: 0, no team
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user account, created beforehand
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            nickname: format!("Pilot {}", id),
            real_name: format!("Pilot Real Name {}", id),
            grid: Grid::Elite,
            cnh_points: DEFAULT_CNH,
            warnings: 0,
            team_id: None,
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    pub fn cnh_points(mut self, cnh_points: i32) -> Self {
        self.cnh_points = cnh_points;
        self
    }

    pub fn warnings(mut self, warnings: i32) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Builds and inserts the pilot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pilot::Model)` - Created pilot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pilot::Model, DbErr> {
        entity::pilot::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            nickname: ActiveValue::Set(self.nickname),
            real_name: ActiveValue::Set(self.real_name),
            grid: ActiveValue::Set(self.grid),
            cnh_points: ActiveValue::Set(self.cnh_points),
            warnings: ActiveValue::Set(self.warnings),
            team_id: ActiveValue::Set(self.team_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pilot with default values for the given user.
pub async fn create_pilot(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::pilot::Model, DbErr> {
    PilotFactory::new(db, user_id).build().await
}
