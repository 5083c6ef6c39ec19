//! Beatmapset event domain models and event type visibility.

use crate::{
    model::event::BeatmapsetEventDto,
    server::model::{
        beatmapset::BeatmapsetWithUser, discussion::DiscussionWithRelations, search::SearchParams,
        user::User,
    },
};

/// Every event type a search may filter on.
pub const EVENT_TYPES: &[&str] = &[
    "nominate",
    "love",
    "remove_from_loved",
    "qualify",
    "disqualify",
    "approve",
    "rank",
    "kudosu_allow",
    "kudosu_deny",
    "kudosu_gain",
    "kudosu_lost",
    "kudosu_recalculate",
    "issue_resolve",
    "issue_reopen",
    "discussion_lock",
    "discussion_unlock",
    "discussion_delete",
    "discussion_restore",
    "discussion_post_delete",
    "discussion_post_restore",
    "nomination_reset",
    "nomination_reset_received",
    "genre_edit",
    "language_edit",
    "nsfw_toggle",
    "offset_edit",
    "tags_edit",
    "beatmap_owner_change",
];

/// Only visible to moderators.
pub const MODERATOR_EVENT_TYPES: &[&str] = &[
    "discussion_delete",
    "discussion_restore",
    "discussion_post_delete",
    "discussion_post_restore",
];

/// Only visible to kudosu moderators.
pub const KUDOSU_MODERATOR_EVENT_TYPES: &[&str] = &["kudosu_allow", "kudosu_deny"];

/// Known event types requested by the search, in request order.
pub fn requested_event_types(params: &SearchParams) -> Vec<&'static str> {
    params
        .types
        .iter()
        .filter_map(|requested| EVENT_TYPES.iter().copied().find(|known| known == requested))
        .collect()
}

/// Event types the viewer must never see.
pub fn hidden_event_types(params: &SearchParams) -> Vec<&'static str> {
    let mut hidden = Vec::new();

    if !params.is_moderator {
        hidden.extend_from_slice(MODERATOR_EVENT_TYPES);
    }
    if !params.is_kudosu_moderator {
        hidden.extend_from_slice(KUDOSU_MODERATOR_EVENT_TYPES);
    }

    hidden
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventWithRelations {
    pub event: entity::beatmapset_event::Model,
    pub user: Option<User>,
    pub beatmapset: Option<BeatmapsetWithUser>,
    pub discussion: Option<DiscussionWithRelations>,
}

impl EventWithRelations {
    pub fn into_dto(self) -> BeatmapsetEventDto {
        let event = self.event;

        BeatmapsetEventDto {
            id: event.id,
            event_type: event.event_type,
            // Older rows hold plain text rather than JSON
            comment: event.comment.map(|comment| {
                serde_json::from_str(&comment).unwrap_or(serde_json::Value::String(comment))
            }),
            created_at: event.created_at,
            user_id: event.user_id,
            beatmapset: self.beatmapset.map(BeatmapsetWithUser::into_dto),
            discussion: self.discussion.map(DiscussionWithRelations::into_dto),
            user: self.user.map(|user| user.to_compact_dto(false)),
        }
    }
}
