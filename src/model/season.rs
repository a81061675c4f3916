use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SeasonDto {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub start_date: NaiveDate,
}

impl From<entity::season::Model> for SeasonDto {
    fn from(season: entity::season::Model) -> Self {
        Self {
            id: season.id,
            name: season.name,
            active: season.active,
            start_date: season.start_date,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateSeasonDto {
    pub name: String,
    pub start_date: NaiveDate,
}
