use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserGroupDto {
    pub identifier: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserCompactDto {
    pub id: i32,
    pub username: String,
    pub country_code: String,
    pub is_active: bool,
    pub is_bot: bool,
    pub is_restricted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<UserGroupDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KudosuDto {
    pub total: i32,
    pub available: i32,
}

/// Full profile item for the user whose history is shown.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    #[serde(flatten)]
    pub compact: UserCompactDto,
    pub playmode: String,
    pub join_date: DateTime<Utc>,
    pub kudosu: KudosuDto,
    pub previous_usernames: Vec<String>,
    pub ranked_and_approved_beatmapset_count: u64,
    pub loved_beatmapset_count: u64,
    pub unranked_beatmapset_count: u64,
    pub graveyard_beatmapset_count: u64,
}
