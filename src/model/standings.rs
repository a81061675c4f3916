use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PilotStandingDto {
    pub position: u32,
    pub pilot_id: i32,
    pub nickname: String,
    pub team_name: Option<String>,
    pub points: f64,
    pub wins: u32,
    /// Ballast car for the next round, empty on the opening and closing rounds.
    pub car: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ConstructorStandingDto {
    pub position: u32,
    pub team_id: i32,
    pub name: String,
    pub points: f64,
    pub wins: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GridEntryDto {
    pub pilot_id: i32,
    pub nickname: String,
    pub team_name: Option<String>,
    pub car: Option<String>,
}

/// Car assignments for a scheduled round, derived from the current standings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GridSheetDto {
    pub race_id: i32,
    pub gp_name: String,
    pub ballast_applies: bool,
    pub entries: Vec<GridEntryDto>,
}
