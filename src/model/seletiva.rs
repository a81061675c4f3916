use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for recording a qualifying lap. The time is accepted as text in
/// `M:SS.mmm` form and normalized to milliseconds server-side.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RecordTimeDto {
    pub pilot_id: i32,
    pub time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SeletivaEntryDto {
    pub rank: u32,
    pub pilot_id: i32,
    pub nickname: String,
    pub time_ms: i64,
    pub time_display: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub recorded_at: DateTime<Utc>,
}
