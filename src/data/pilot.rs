use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::Grid;

/// Admin-editable pilot fields. `None` leaves a field untouched; `team_id`
/// uses a nested option so admins can explicitly clear a team assignment.
#[derive(Default)]
pub struct UpdatePilotParams {
    pub nickname: Option<String>,
    pub real_name: Option<String>,
    pub photo_url: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub grid: Option<Grid>,
    pub team_id: Option<Option<i32>>,
    pub cnh_points: Option<i32>,
    pub warnings: Option<i32>,
}

pub struct PilotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pilot profile attached to a user account
    ///
    /// # Arguments
    /// - `user_id`: Owning account
    /// - `nickname`: In-game name shown on standings
    /// - `real_name`: Legal name for internal records
    /// - `phone`: Optional contact number
    /// - `grid`: Starting grid placement, usually unranked until a seletiva
    /// - `cnh_points`: Starting license points
    ///
    /// # Returns
    /// - `Ok(Model)`: The created pilot
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        user_id: i32,
        nickname: String,
        real_name: String,
        phone: Option<String>,
        grid: Grid,
        cnh_points: i32,
    ) -> Result<entity::pilot::Model, DbErr> {
        entity::pilot::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            nickname: ActiveValue::Set(nickname),
            real_name: ActiveValue::Set(real_name),
            phone: ActiveValue::Set(phone),
            grid: ActiveValue::Set(grid),
            cnh_points: ActiveValue::Set(cnh_points),
            warnings: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::pilot::Model>, DbErr> {
        entity::prelude::Pilot::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::pilot::Model>, DbErr> {
        entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::pilot::Model>, DbErr> {
        entity::prelude::Pilot::find()
            .order_by_asc(entity::pilot::Column::Nickname)
            .all(self.db)
            .await
    }

    pub async fn get_by_grid(&self, grid: Grid) -> Result<Vec<entity::pilot::Model>, DbErr> {
        entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Grid.eq(grid))
            .order_by_asc(entity::pilot::Column::Nickname)
            .all(self.db)
            .await
    }

    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<entity::pilot::Model>, DbErr> {
        entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::TeamId.eq(team_id))
            .order_by_asc(entity::pilot::Column::Nickname)
            .all(self.db)
            .await
    }

    /// Updates a pilot per the given params
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated pilot
    /// - `Err(DbErr)`: Pilot not found or database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePilotParams,
    ) -> Result<entity::pilot::Model, DbErr> {
        let Some(pilot) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Pilot {id} not found")));
        };

        let mut active: entity::pilot::ActiveModel = pilot.into();

        if let Some(nickname) = params.nickname {
            active.nickname = ActiveValue::Set(nickname);
        }
        if let Some(real_name) = params.real_name {
            active.real_name = ActiveValue::Set(real_name);
        }
        if let Some(photo_url) = params.photo_url {
            active.photo_url = ActiveValue::Set(photo_url);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(grid) = params.grid {
            active.grid = ActiveValue::Set(grid);
        }
        if let Some(team_id) = params.team_id {
            active.team_id = ActiveValue::Set(team_id);
        }
        if let Some(cnh_points) = params.cnh_points {
            active.cnh_points = ActiveValue::Set(cnh_points);
        }
        if let Some(warnings) = params.warnings {
            active.warnings = ActiveValue::Set(warnings);
        }

        active.update(self.db).await
    }

    /// Adjusts a pilot's license balance by a signed delta
    ///
    /// # Returns
    /// - `Ok(Model)`: The pilot with the new balance
    /// - `Err(DbErr)`: Pilot not found or database error
    pub async fn adjust_cnh(&self, id: i32, delta: i32) -> Result<entity::pilot::Model, DbErr> {
        let Some(pilot) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Pilot {id} not found")));
        };

        let new_balance = pilot.cnh_points + delta;

        let mut active: entity::pilot::ActiveModel = pilot.into();
        active.cnh_points = ActiveValue::Set(new_balance);

        active.update(self.db).await
    }

    /// Adjusts a pilot's warning counter by a signed delta, clamped at zero
    pub async fn adjust_warnings(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<entity::pilot::Model, DbErr> {
        let Some(pilot) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Pilot {id} not found")));
        };

        let new_count = (pilot.warnings + delta).max(0);

        let mut active: entity::pilot::ActiveModel = pilot.into();
        active.warnings = ActiveValue::Set(new_count);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Pilot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
