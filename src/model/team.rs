use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub grid: String,
    pub active: bool,
}

impl From<entity::team::Model> for TeamDto {
    fn from(team: entity::team::Model) -> Self {
        Self {
            id: team.id,
            name: team.name,
            logo_url: team.logo_url,
            grid: team.grid.to_value(),
            active: team.active,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateTeamDto {
    pub name: String,
    pub logo_url: Option<String>,
    pub grid: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub grid: Option<String>,
}
