use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct OpenProtestDto {
    pub race_id: i32,
    pub accused_id: i32,
    pub video_url: Option<String>,
    pub minute_mark: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct DefenseDto {
    pub defense_video_url: Option<String>,
    pub defense_argument: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct VoteDto {
    pub choice: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CloseProtestDto {
    pub verdict: String,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ProtestVoteDto {
    pub admin_id: i32,
    pub admin_username: String,
    pub choice: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ProtestDto {
    pub id: i32,
    pub race_id: i32,
    pub gp_name: String,
    pub accuser_id: i32,
    pub accuser_nickname: String,
    pub accused_id: i32,
    pub accused_nickname: String,
    pub video_url: Option<String>,
    pub minute_mark: Option<String>,
    pub description: Option<String>,
    pub defense_video_url: Option<String>,
    pub defense_argument: Option<String>,
    pub status: String,
    pub verdict: Option<String>,
    pub verdict_reason: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub closed_at: Option<DateTime<Utc>>,
    pub votes: Vec<ProtestVoteDto>,
}

impl ProtestDto {
    pub fn from_model(
        protest: entity::protest::Model,
        gp_name: String,
        accuser_nickname: String,
        accused_nickname: String,
        votes: Vec<ProtestVoteDto>,
    ) -> Self {
        Self {
            id: protest.id,
            race_id: protest.race_id,
            gp_name,
            accuser_id: protest.accuser_id,
            accuser_nickname,
            accused_id: protest.accused_id,
            accused_nickname,
            video_url: protest.video_url,
            minute_mark: protest.minute_mark,
            description: protest.description,
            defense_video_url: protest.defense_video_url,
            defense_argument: protest.defense_argument,
            status: protest.status.to_value(),
            verdict: protest.verdict.map(|v| v.to_value()),
            verdict_reason: protest.verdict_reason,
            created_at: protest.created_at,
            closed_at: protest.closed_at,
            votes,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ProtestListItemDto {
    pub id: i32,
    pub race_id: i32,
    pub gp_name: String,
    pub accuser_nickname: String,
    pub accused_nickname: String,
    pub status: String,
    pub verdict: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
