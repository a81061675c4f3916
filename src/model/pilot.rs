use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PilotDto {
    pub id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub real_name: String,
    pub photo_url: Option<String>,
    pub grid: String,
    pub cnh_points: i32,
    pub warnings: i32,
    pub banned: bool,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl PilotDto {
    pub fn from_model(pilot: entity::pilot::Model, team_name: Option<String>) -> Self {
        Self {
            id: pilot.id,
            user_id: pilot.user_id,
            nickname: pilot.nickname,
            real_name: pilot.real_name,
            photo_url: pilot.photo_url,
            grid: pilot.grid.to_value(),
            cnh_points: pilot.cnh_points,
            warnings: pilot.warnings,
            banned: pilot.cnh_points <= 0,
            team_id: pilot.team_id,
            team_name,
        }
    }
}

/// Fields a pilot may change on their own profile.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateProfileDto {
    pub nickname: Option<String>,
    pub real_name: Option<String>,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
}

/// Fields an admin may change on any pilot, including the disciplinary
/// counters and grid placement.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdatePilotDto {
    pub nickname: Option<String>,
    pub real_name: Option<String>,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
    pub grid: Option<String>,
    pub team_id: Option<Option<i32>>,
    pub cnh_points: Option<i32>,
    pub warnings: Option<i32>,
}

/// One season of a pilot's career history. `grid` is the grid the pilot
/// raced most of that season's rounds in.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CareerSeasonDto {
    pub season_id: i32,
    pub season_name: String,
    pub grid: String,
    pub points: f64,
    pub wins: u32,
    pub podiums: u32,
    pub races: u32,
}
