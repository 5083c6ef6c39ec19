use serde::{Deserialize, Serialize};

use crate::model::{
    discussion::{BeatmapDiscussionDto, BeatmapDiscussionPostDto},
    event::BeatmapsetEventDto,
    kudosu::KudosuHistoryDto,
    user::{UserCompactDto, UserDto},
    vote::VoteSummaryDto,
};

/// Normalized search parameters echoed back to the client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchParamsDto {
    pub user: Option<i32>,
    pub receiver: Option<i32>,
    pub beatmapset_id: Option<i32>,
    pub beatmap_id: Option<i32>,
    pub beatmapset_discussion_id: Option<i32>,
    pub score: Option<i32>,
    pub types: Vec<String>,
    pub message_types: Vec<String>,
    pub only_unresolved: bool,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub with_deleted: bool,
    pub limit: u64,
    pub page: u64,
    pub sort: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginationDto {
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}

/// One page of a modding history tab.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModdingPageDto<T> {
    pub items: Vec<T>,
    pub pagination: PaginationDto,
    pub search: SearchParamsDto,
    pub user: UserCompactDto,
    pub show_user_search: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VotesDto {
    pub given: Vec<VoteSummaryDto>,
    pub received: Vec<VoteSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtrasDto {
    pub recently_received_kudosu: Vec<KudosuHistoryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerPageDto {
    pub recently_received_kudosu: u64,
}

/// Profile aggregate rendered on the modding history overview.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModdingHistoryDto {
    pub extras: ExtrasDto,
    pub per_page: PerPageDto,
    pub user: UserDto,
    pub discussions: Vec<BeatmapDiscussionDto>,
    pub events: Vec<BeatmapsetEventDto>,
    pub posts: Vec<BeatmapDiscussionPostDto>,
    pub votes: VotesDto,
    pub users: Vec<UserCompactDto>,
}

/// Further rows of received kudosu history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KudosuPageDto {
    pub items: Vec<KudosuHistoryDto>,
    pub limit: u64,
    pub offset: u64,
}
