use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    beatmapset::{BeatmapCompactDto, BeatmapsetCompactDto},
    user::UserCompactDto,
};

/// Permissions and vote of the viewer on a single discussion.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentUserAttributesDto {
    pub vote_score: i32,
    pub can_moderate_kudosu: bool,
    pub can_resolve: bool,
    pub can_reopen: bool,
    pub can_destroy: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BeatmapDiscussionPostDto {
    pub id: i32,
    pub beatmap_discussion_id: i32,
    pub user_id: Option<i32>,
    pub last_editor_id: Option<i32>,
    pub message: String,
    pub system: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserCompactDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beatmap_discussion: Option<Box<BeatmapDiscussionDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BeatmapDiscussionDto {
    pub id: i32,
    pub beatmapset_id: i32,
    pub beatmap_id: Option<i32>,
    pub user_id: Option<i32>,
    pub message_type: String,
    pub resolved: bool,
    pub kudosu_denied: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_post_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beatmap: Option<BeatmapCompactDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beatmapset: Option<BeatmapsetCompactDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_post: Option<BeatmapDiscussionPostDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserCompactDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_attributes: Option<CurrentUserAttributesDto>,
}
