//! Normalized search parameters shared by every modding history search.
//!
//! Raw query pairs are parsed leniently: unknown keys are ignored and values that do
//! not parse fall back to their defaults. The target user always comes from the
//! route, never from the query string.

use chrono::NaiveDate;
use sea_orm::Order;

use crate::{
    model::modding::SearchParamsDto,
    server::{
        model::privilege::Privileges,
        util::parse::{parse_bool, parse_date, parse_id, parse_int},
    },
};

pub const DEFAULT_LIMIT: u64 = 20;
pub const MIN_LIMIT: u64 = 5;
pub const MAX_LIMIT: u64 = 50;
/// Highest page whose offset still fits a signed 64-bit SQL `OFFSET` at `MAX_LIMIT`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    IdDesc,
    IdAsc,
}

impl SortOrder {
    /// Parses a sort name, falling back to `id_desc` for unknown values.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "id_asc" => Self::IdAsc,
            _ => Self::IdDesc,
        }
    }

    /// Direction for ordering by primary key.
    pub fn order(&self) -> Order {
        match self {
            Self::IdDesc => Order::Desc,
            Self::IdAsc => Order::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdDesc => "id_desc",
            Self::IdAsc => "id_asc",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Author, actor or voter depending on the searched record.
    pub user: Option<i32>,
    /// Author of the discussion a vote was cast on.
    pub receiver: Option<i32>,
    pub beatmapset_id: Option<i32>,
    pub beatmap_id: Option<i32>,
    pub beatmapset_discussion_id: Option<i32>,
    pub score: Option<i32>,
    pub types: Vec<String>,
    pub message_types: Vec<String>,
    pub only_unresolved: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub with_deleted: bool,
    pub limit: u64,
    pub page: u64,
    pub sort: SortOrder,
    pub is_moderator: bool,
    pub is_kudosu_moderator: bool,
}

impl SearchParams {
    /// Builds search parameters for `user_id` from raw query pairs.
    ///
    /// Repeated keys such as `types[]` accumulate. `with_deleted` is only honoured
    /// for moderators.
    pub fn from_query(pairs: &[(String, String)], user_id: i32, privileges: &Privileges) -> Self {
        let mut params = Self {
            user: Some(user_id),
            receiver: None,
            beatmapset_id: None,
            beatmap_id: None,
            beatmapset_discussion_id: None,
            score: None,
            types: Vec::new(),
            message_types: Vec::new(),
            only_unresolved: false,
            min_date: None,
            max_date: None,
            with_deleted: false,
            limit: DEFAULT_LIMIT,
            page: 1,
            sort: SortOrder::default(),
            is_moderator: privileges.is_moderator,
            is_kudosu_moderator: privileges.is_kudosu_moderator,
        };

        for (key, value) in pairs {
            match key.trim_end_matches("[]") {
                "receiver" => params.receiver = parse_id(value),
                "beatmapset_id" => params.beatmapset_id = parse_id(value),
                "beatmap_id" => params.beatmap_id = parse_id(value),
                "beatmapset_discussion_id" => params.beatmapset_discussion_id = parse_id(value),
                "score" => params.score = parse_id(value),
                "types" => push_unique(&mut params.types, value),
                "message_types" => push_unique(&mut params.message_types, value),
                "only_unresolved" => params.only_unresolved = parse_bool(value),
                "min_date" => params.min_date = parse_date(value),
                "max_date" => params.max_date = parse_date(value),
                "with_deleted" => params.with_deleted = parse_bool(value),
                "limit" => {
                    params.limit = parse_int(value)
                        .map(|limit| limit.clamp(MIN_LIMIT as i64, MAX_LIMIT as i64) as u64)
                        .unwrap_or(DEFAULT_LIMIT)
                }
                "page" => {
                    params.page = parse_int(value)
                        .map(|page| page.clamp(1, MAX_PAGE as i64) as u64)
                        .unwrap_or(1)
                }
                "sort" => params.sort = SortOrder::parse(value),
                _ => {}
            }
        }

        if !privileges.is_moderator {
            params.with_deleted = false;
        }

        params
    }

    pub fn to_dto(&self) -> SearchParamsDto {
        SearchParamsDto {
            user: self.user,
            receiver: self.receiver,
            beatmapset_id: self.beatmapset_id,
            beatmap_id: self.beatmap_id,
            beatmapset_discussion_id: self.beatmapset_discussion_id,
            score: self.score,
            types: self.types.clone(),
            message_types: self.message_types.clone(),
            only_unresolved: self.only_unresolved,
            min_date: self.min_date.map(|date| date.format("%Y-%m-%d").to_string()),
            max_date: self.max_date.map(|date| date.format("%Y-%m-%d").to_string()),
            with_deleted: self.with_deleted,
            limit: self.limit,
            page: self.page,
            sort: self.sort.as_str().to_string(),
        }
    }

    /// Query pairs reproducing these parameters in a link.
    ///
    /// The target user lives in the route and privilege flags are never exposed.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: String| pairs.push((key.to_string(), value));

        let optional_ids = [
            ("receiver", self.receiver),
            ("beatmapset_id", self.beatmapset_id),
            ("beatmap_id", self.beatmap_id),
            ("beatmapset_discussion_id", self.beatmapset_discussion_id),
            ("score", self.score),
        ];
        for (key, value) in optional_ids {
            if let Some(value) = value {
                push(key, value.to_string());
            }
        }
        for value in &self.types {
            push("types[]", value.clone());
        }
        for value in &self.message_types {
            push("message_types[]", value.clone());
        }
        if self.only_unresolved {
            push("only_unresolved", "1".to_string());
        }
        if let Some(date) = self.min_date {
            push("min_date", date.format("%Y-%m-%d").to_string());
        }
        if let Some(date) = self.max_date {
            push("max_date", date.format("%Y-%m-%d").to_string());
        }
        if self.with_deleted {
            push("with_deleted", "1".to_string());
        }
        push("limit", self.limit.to_string());
        push("sort", self.sort.as_str().to_string());
        push("page", self.page.to_string());

        pairs
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}
