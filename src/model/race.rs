use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RaceDto {
    pub id: i32,
    pub season_id: i32,
    pub gp_name: String,
    pub track: String,
    pub race_date: Option<NaiveDate>,
    pub grid: String,
    pub status: String,
    pub kind: String,
}

impl From<entity::race::Model> for RaceDto {
    fn from(race: entity::race::Model) -> Self {
        Self {
            id: race.id,
            season_id: race.season_id,
            gp_name: race.gp_name,
            track: race.track,
            race_date: race.race_date,
            grid: race.grid.to_value(),
            status: race.status.to_value(),
            kind: race.kind.to_value(),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateRaceDto {
    pub season_id: i32,
    pub gp_name: String,
    pub track: String,
    pub race_date: Option<NaiveDate>,
    pub grid: String,
    pub kind: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateRaceDto {
    pub gp_name: Option<String>,
    pub track: Option<String>,
    pub race_date: Option<NaiveDate>,
    pub grid: Option<String>,
    pub kind: Option<String>,
}

/// Payload for a pilot declaring an absence ahead of a race.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AbsenceDto {
    pub excuse: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RegistrationDto {
    pub id: i32,
    pub race_id: i32,
    pub pilot_id: i32,
    pub pilot_nickname: String,
    pub status: String,
    pub excuse: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub responded_at: DateTime<Utc>,
}

impl RegistrationDto {
    pub fn from_model(reg: entity::race_registration::Model, pilot_nickname: String) -> Self {
        Self {
            id: reg.id,
            race_id: reg.race_id,
            pilot_id: reg.pilot_id,
            pilot_nickname,
            status: reg.status.to_value(),
            excuse: reg.excuse,
            responded_at: reg.responded_at,
        }
    }
}
