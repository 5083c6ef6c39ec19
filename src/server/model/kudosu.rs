use crate::{
    model::kudosu::{KudosuGiverDto, KudosuHistoryDto, KudosuPostDto},
    server::{
        model::{beatmapset::BeatmapsetWithUser, user::User},
        util::{parse::parse_int, url::UrlBuilder},
    },
};

/// Kudosu rows shown on the profile before "show more".
pub const RECENT_KUDOSU_PER_PAGE: u64 = 5;

pub const DEFAULT_KUDOSU_LIMIT: u64 = 5;
pub const MAX_KUDOSU_LIMIT: u64 = 50;

/// `kudosuable_type` of history rows attached to a beatmap discussion.
pub const DISCUSSION_KUDOSUABLE: &str = "beatmap_discussion";

/// Shown when the discussion or beatmapset behind a kudosu change is gone.
const DELETED_POST_TITLE: &str = "[deleted beatmap]";

/// Offset based paging for the kudosu history listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KudosuPageParams {
    pub limit: u64,
    pub offset: u64,
}

impl KudosuPageParams {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let mut params = Self {
            limit: DEFAULT_KUDOSU_LIMIT,
            offset: 0,
        };

        for (key, value) in pairs {
            match key.as_str() {
                "limit" => {
                    params.limit = parse_int(value)
                        .map(|limit| limit.clamp(1, MAX_KUDOSU_LIMIT as i64) as u64)
                        .unwrap_or(DEFAULT_KUDOSU_LIMIT)
                }
                "offset" => params.offset = parse_int(value).map(|o| o.max(0) as u64).unwrap_or(0),
                _ => {}
            }
        }

        params
    }
}

/// The discussion a kudosu change was awarded for.
#[derive(Debug, Clone, PartialEq)]
pub struct KudosuSource {
    pub discussion: entity::beatmap_discussion::Model,
    pub beatmapset: Option<BeatmapsetWithUser>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KudosuWithRelations {
    pub history: entity::kudosu_history::Model,
    pub giver: Option<User>,
    pub source: Option<KudosuSource>,
}

impl KudosuWithRelations {
    pub fn into_dto(self, urls: &UrlBuilder) -> KudosuHistoryDto {
        let post = match &self.source {
            Some(KudosuSource {
                discussion,
                beatmapset: Some(beatmapset),
            }) => KudosuPostDto {
                url: Some(urls.discussion(discussion.beatmapset_id, discussion.id)),
                title: beatmapset.display_title(),
            },
            _ => KudosuPostDto {
                url: None,
                title: DELETED_POST_TITLE.to_string(),
            },
        };

        KudosuHistoryDto {
            id: self.history.exchange_id,
            action: self.history.action,
            amount: self.history.amount,
            model: self.history.kudosuable_type,
            created_at: self.history.created_at,
            giver: self.giver.map(|giver| KudosuGiverDto {
                url: urls.user(giver.id),
                username: giver.username,
            }),
            post,
        }
    }
}
