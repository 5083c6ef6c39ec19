use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    beatmapset::BeatmapsetCompactDto, discussion::BeatmapDiscussionDto, user::UserCompactDto,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BeatmapsetEventDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub event_type: String,
    pub comment: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beatmapset: Option<BeatmapsetCompactDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion: Option<BeatmapDiscussionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserCompactDto>,
}
