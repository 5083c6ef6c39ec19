use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserCompactDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BeatmapsetCompactDto {
    pub id: i32,
    pub user_id: i32,
    pub artist: String,
    pub title: String,
    pub creator: String,
    pub status: String,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserCompactDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BeatmapCompactDto {
    pub id: i32,
    pub beatmapset_id: i32,
    pub version: String,
    pub deleted_at: Option<DateTime<Utc>>,
}
