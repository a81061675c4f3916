use serde::{Deserialize, Serialize};

use crate::model::season::SeasonDto;

/// Snapshot counts for the race-direction dashboard.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct OverviewDto {
    pub active_season: Option<SeasonDto>,
    pub pilot_count: u64,
    pub team_count: u64,
    pub completed_races: u64,
    pub open_protests: u64,
}
