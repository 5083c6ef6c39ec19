use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{discussion::BeatmapDiscussionDto, user::UserCompactDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BeatmapDiscussionVoteDto {
    pub id: i32,
    pub beatmap_discussion_id: i32,
    pub user_id: i32,
    pub score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserCompactDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beatmap_discussion: Option<BeatmapDiscussionDto>,
}

/// Votes exchanged with one other user over the recent timeframe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VoteSummaryDto {
    pub user_id: Option<i32>,
    pub score: i64,
    pub count: i64,
}
