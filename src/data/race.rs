use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::{Grid, RaceKind, RaceStatus};

pub struct RaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a race in a season's calendar
    ///
    /// # Arguments
    /// - `season_id`: Season the race belongs to
    /// - `gp_name`: Grand prix title shown on the calendar
    /// - `track`: Circuit name
    /// - `race_date`: Optional scheduled date
    /// - `grid`: Which grid races this round
    /// - `kind`: Scoring kind (normal, sprint, or season final)
    ///
    /// # Returns
    /// - `Ok(Model)`: The scheduled race
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        season_id: i32,
        gp_name: String,
        track: String,
        race_date: Option<NaiveDate>,
        grid: Grid,
        kind: RaceKind,
    ) -> Result<entity::race::Model, DbErr> {
        entity::race::ActiveModel {
            season_id: ActiveValue::Set(season_id),
            gp_name: ActiveValue::Set(gp_name),
            track: ActiveValue::Set(track),
            race_date: ActiveValue::Set(race_date),
            grid: ActiveValue::Set(grid),
            status: ActiveValue::Set(RaceStatus::Scheduled),
            kind: ActiveValue::Set(kind),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::race::Model>, DbErr> {
        entity::prelude::Race::find_by_id(id).one(self.db).await
    }

    /// Gets a season's calendar in date order, undated races last
    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<entity::race::Model>, DbErr> {
        entity::prelude::Race::find()
            .filter(entity::race::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::race::Column::RaceDate)
            .order_by_asc(entity::race::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_season_and_grid(
        &self,
        season_id: i32,
        grid: Grid,
    ) -> Result<Vec<entity::race::Model>, DbErr> {
        entity::prelude::Race::find()
            .filter(entity::race::Column::SeasonId.eq(season_id))
            .filter(entity::race::Column::Grid.eq(grid))
            .order_by_asc(entity::race::Column::RaceDate)
            .order_by_asc(entity::race::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        gp_name: Option<String>,
        track: Option<String>,
        race_date: Option<Option<NaiveDate>>,
        grid: Option<Grid>,
        kind: Option<RaceKind>,
    ) -> Result<entity::race::Model, DbErr> {
        let Some(race) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Race {id} not found")));
        };

        let mut active: entity::race::ActiveModel = race.into();

        if let Some(gp_name) = gp_name {
            active.gp_name = ActiveValue::Set(gp_name);
        }
        if let Some(track) = track {
            active.track = ActiveValue::Set(track);
        }
        if let Some(race_date) = race_date {
            active.race_date = ActiveValue::Set(race_date);
        }
        if let Some(grid) = grid {
            active.grid = ActiveValue::Set(grid);
        }
        if let Some(kind) = kind {
            active.kind = ActiveValue::Set(kind);
        }

        active.update(self.db).await
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: RaceStatus,
    ) -> Result<entity::race::Model, DbErr> {
        let Some(race) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Race {id} not found")));
        };

        let mut active: entity::race::ActiveModel = race.into();
        active.status = ActiveValue::Set(status);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Race::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
