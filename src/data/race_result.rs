use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::Absence;

/// All columns of a result line as computed by the settlement engine.
pub struct InsertResultParams {
    pub race_id: i32,
    pub pilot_id: i32,
    pub team_id: Option<i32>,
    pub position: i32,
    pub points: f64,
    pub fastest_lap: bool,
    pub driver_of_the_day: bool,
    pub fan_favorite: bool,
    pub dnf: bool,
    pub dsq: bool,
    pub absence: Option<Absence>,
}

pub struct RaceResultRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaceResultRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        params: InsertResultParams,
    ) -> Result<entity::race_result::Model, DbErr> {
        entity::race_result::ActiveModel {
            race_id: ActiveValue::Set(params.race_id),
            pilot_id: ActiveValue::Set(params.pilot_id),
            team_id: ActiveValue::Set(params.team_id),
            position: ActiveValue::Set(params.position),
            points: ActiveValue::Set(params.points),
            fastest_lap: ActiveValue::Set(params.fastest_lap),
            driver_of_the_day: ActiveValue::Set(params.driver_of_the_day),
            fan_favorite: ActiveValue::Set(params.fan_favorite),
            dnf: ActiveValue::Set(params.dnf),
            dsq: ActiveValue::Set(params.dsq),
            absence: ActiveValue::Set(params.absence),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::race_result::Model>, DbErr> {
        entity::prelude::RaceResult::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the classification of a race, finishers first in position order,
    /// then retirements and absentees
    pub async fn get_by_race(&self, race_id: i32) -> Result<Vec<entity::race_result::Model>, DbErr> {
        entity::prelude::RaceResult::find()
            .filter(entity::race_result::Column::RaceId.eq(race_id))
            .order_by_asc(entity::race_result::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn get_by_pilot(
        &self,
        pilot_id: i32,
    ) -> Result<Vec<entity::race_result::Model>, DbErr> {
        entity::prelude::RaceResult::find()
            .filter(entity::race_result::Column::PilotId.eq(pilot_id))
            .all(self.db)
            .await
    }

    /// Gets every result line credited to a team, whoever drove it. Lines
    /// keep their team attribution after transfers, so this is the source
    /// of truth for constructor points.
    pub async fn get_by_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::race_result::Model>, DbErr> {
        entity::prelude::RaceResult::find()
            .filter(entity::race_result::Column::TeamId.eq(team_id))
            .all(self.db)
            .await
    }

    pub async fn find_by_race_and_pilot(
        &self,
        race_id: i32,
        pilot_id: i32,
    ) -> Result<Option<entity::race_result::Model>, DbErr> {
        entity::prelude::RaceResult::find()
            .filter(entity::race_result::Column::RaceId.eq(race_id))
            .filter(entity::race_result::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await
    }

    pub async fn pilot_has_results(&self, pilot_id: i32) -> Result<bool, DbErr> {
        use sea_orm::PaginatorTrait;

        let count = entity::prelude::RaceResult::find()
            .filter(entity::race_result::Column::PilotId.eq(pilot_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn team_has_results(&self, team_id: i32) -> Result<bool, DbErr> {
        use sea_orm::PaginatorTrait;

        let count = entity::prelude::RaceResult::find()
            .filter(entity::race_result::Column::TeamId.eq(team_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a signed points delta to a single result line. Used by the
    /// tribunal to mirror license penalties on the standings.
    pub async fn adjust_points(
        &self,
        id: i32,
        delta: f64,
    ) -> Result<entity::race_result::Model, DbErr> {
        let Some(result) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Race result {id} not found")));
        };

        let new_points = result.points + delta;

        let mut active: entity::race_result::ActiveModel = result.into();
        active.points = ActiveValue::Set(new_points);

        active.update(self.db).await
    }

    pub async fn delete_by_race(&self, race_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RaceResult::delete_many()
            .filter(entity::race_result::Column::RaceId.eq(race_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
