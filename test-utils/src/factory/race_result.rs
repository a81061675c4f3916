//! Race result factory for creating settled result lines.

use entity::enums::Absence;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RaceResultFactory<'a> {
    db: &'a DatabaseConnection,
    race_id: i32,
    pilot_id: i32,
    team_id: Option<i32>,
    position: i32,
    points: f64,
    fastest_lap: bool,
    driver_of_the_day: bool,
    fan_favorite: bool,
    dnf: bool,
    dsq: bool,
    absence: Option<Absence>,
}

impl<'a> RaceResultFactory<'a> {
    /// Creates a new RaceResultFactory with default values.
    ///
    /// Defaults: position 1 scoring 35.0, no bonuses, classified, no team.
    pub fn new(db: &'a DatabaseConnection, race_id: i32, pilot_id: i32) -> Self {
        Self {
            db,
            race_id,
            pilot_id,
            team_id: None,
            position: 1,
            points: 35.0,
            fastest_lap: false,
            driver_of_the_day: false,
            fan_favorite: false,
            dnf: false,
            dsq: false,
            absence: None,
        }
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    pub fn fastest_lap(mut self, fastest_lap: bool) -> Self {
        self.fastest_lap = fastest_lap;
        self
    }

    pub fn dnf(mut self, dnf: bool) -> Self {
        self.dnf = dnf;
        self
    }

    pub fn dsq(mut self, dsq: bool) -> Self {
        self.dsq = dsq;
        self
    }

    pub fn absence(mut self, absence: Absence) -> Self {
        self.absence = Some(absence);
        self
    }

    /// Builds and inserts the result line into the database.
    pub async fn build(self) -> Result<entity::race_result::Model, DbErr> {
        entity::race_result::ActiveModel {
            race_id: ActiveValue::Set(self.race_id),
            pilot_id: ActiveValue::Set(self.pilot_id),
            team_id: ActiveValue::Set(self.team_id),
            position: ActiveValue::Set(self.position),
            points: ActiveValue::Set(self.points),
            fastest_lap: ActiveValue::Set(self.fastest_lap),
            driver_of_the_day: ActiveValue::Set(self.driver_of_the_day),
            fan_favorite: ActiveValue::Set(self.fan_favorite),
            dnf: ActiveValue::Set(self.dnf),
            dsq: ActiveValue::Set(self.dsq),
            absence: ActiveValue::Set(self.absence),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a winning result line for the given race and pilot.
pub async fn create_race_result(
    db: &DatabaseConnection,
    race_id: i32,
    pilot_id: i32,
) -> Result<entity::race_result::Model, DbErr> {
    RaceResultFactory::new(db, race_id, pilot_id).build().await
}
