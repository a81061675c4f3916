use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

/// One line of an incoming results sheet.
///
/// `team_id` may be omitted; the settlement keeps whichever team the pilot
/// raced for the last time these results were saved, falling back to their
/// current team. `absence` marks pilots who never took the start.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ResultLineDto {
    pub pilot_id: i32,
    pub team_id: Option<i32>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub dnf: bool,
    #[serde(default)]
    pub dsq: bool,
    #[serde(default)]
    pub fastest_lap: bool,
    #[serde(default)]
    pub driver_of_the_day: bool,
    #[serde(default)]
    pub fan_favorite: bool,
    pub absence: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SaveResultsDto {
    pub lines: Vec<ResultLineDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RaceResultDto {
    pub id: i32,
    pub race_id: i32,
    pub pilot_id: i32,
    pub pilot_nickname: String,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub position: i32,
    pub points: f64,
    pub fastest_lap: bool,
    pub driver_of_the_day: bool,
    pub fan_favorite: bool,
    pub dnf: bool,
    pub dsq: bool,
    pub absence: Option<String>,
}

impl RaceResultDto {
    pub fn from_model(
        result: entity::race_result::Model,
        pilot_nickname: String,
        team_name: Option<String>,
    ) -> Self {
        Self {
            id: result.id,
            race_id: result.race_id,
            pilot_id: result.pilot_id,
            pilot_nickname,
            team_id: result.team_id,
            team_name,
            position: result.position,
            points: result.points,
            fastest_lap: result.fastest_lap,
            driver_of_the_day: result.driver_of_the_day,
            fan_favorite: result.fan_favorite,
            dnf: result.dnf,
            dsq: result.dsq,
            absence: result.absence.map(|a| a.to_value()),
        }
    }
}
