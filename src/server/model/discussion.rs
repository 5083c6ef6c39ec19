//! Beatmap discussion domain models.

use crate::{
    model::discussion::{BeatmapDiscussionDto, CurrentUserAttributesDto},
    server::model::{
        beatmapset::{beatmap_into_dto, BeatmapsetWithUser},
        post::PostWithRelations,
        privilege::Privileges,
        user::User,
    },
};

/// Message types that can be marked resolved.
const RESOLVABLE_MESSAGE_TYPES: &[&str] = &["problem", "suggestion"];

/// What the viewer may do with a discussion, plus their vote on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUserAttributes {
    pub vote_score: i32,
    pub can_moderate_kudosu: bool,
    pub can_resolve: bool,
    pub can_reopen: bool,
    pub can_destroy: bool,
}

impl CurrentUserAttributes {
    /// Computes the viewer's permissions on `discussion`.
    ///
    /// # Arguments
    /// - `discussion` - The discussion being displayed
    /// - `beatmapset_owner` - Owner of the discussion's beatmapset, when loaded
    /// - `privileges` - Viewer privileges
    /// - `vote_score` - Viewer's current vote on the discussion, 0 when none
    ///
    /// # Returns
    /// - `Some(CurrentUserAttributes)` - Viewer is logged in
    /// - `None` - Anonymous viewer
    pub fn for_viewer(
        discussion: &entity::beatmap_discussion::Model,
        beatmapset_owner: Option<i32>,
        privileges: &Privileges,
        vote_score: i32,
    ) -> Option<Self> {
        let viewer_id = privileges.viewer_id?;

        let is_starter = discussion.user_id == Some(viewer_id);
        let is_owner = beatmapset_owner == Some(viewer_id);
        let resolvable = RESOLVABLE_MESSAGE_TYPES.contains(&discussion.message_type.as_str());
        let can_change_state = is_starter || is_owner || privileges.is_moderator;

        Some(Self {
            vote_score,
            can_moderate_kudosu: privileges.is_kudosu_moderator,
            can_resolve: resolvable && can_change_state,
            can_reopen: resolvable && discussion.resolved && can_change_state,
            can_destroy: discussion.deleted_at.is_none()
                && (privileges.is_moderator || (is_starter && !discussion.resolved)),
        })
    }

    pub fn into_dto(self) -> CurrentUserAttributesDto {
        CurrentUserAttributesDto {
            vote_score: self.vote_score,
            can_moderate_kudosu: self.can_moderate_kudosu,
            can_resolve: self.can_resolve,
            can_reopen: self.can_reopen,
            can_destroy: self.can_destroy,
        }
    }
}

/// Discussion with whichever relations the action asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscussionWithRelations {
    pub discussion: entity::beatmap_discussion::Model,
    pub beatmap: Option<entity::beatmap::Model>,
    pub beatmapset: Option<BeatmapsetWithUser>,
    pub starting_post: Option<entity::beatmap_discussion_post::Model>,
    pub user: Option<User>,
    pub current_user_attributes: Option<CurrentUserAttributes>,
}

impl DiscussionWithRelations {
    pub fn new(discussion: entity::beatmap_discussion::Model) -> Self {
        Self {
            discussion,
            beatmap: None,
            beatmapset: None,
            starting_post: None,
            user: None,
            current_user_attributes: None,
        }
    }

    pub fn into_dto(self) -> BeatmapDiscussionDto {
        let discussion = self.discussion;

        BeatmapDiscussionDto {
            id: discussion.id,
            beatmapset_id: discussion.beatmapset_id,
            beatmap_id: discussion.beatmap_id,
            user_id: discussion.user_id,
            message_type: discussion.message_type,
            resolved: discussion.resolved,
            kudosu_denied: discussion.kudosu_denied,
            deleted_at: discussion.deleted_at,
            deleted_by_id: discussion.deleted_by_id,
            created_at: discussion.created_at,
            updated_at: discussion.updated_at,
            last_post_at: discussion.last_post_at,
            beatmap: self.beatmap.map(beatmap_into_dto),
            beatmapset: self.beatmapset.map(BeatmapsetWithUser::into_dto),
            starting_post: self
                .starting_post
                .map(|post| PostWithRelations::new(post).into_dto()),
            user: self.user.map(|user| user.to_compact_dto(false)),
            current_user_attributes: self
                .current_user_attributes
                .map(CurrentUserAttributes::into_dto),
        }
    }
}
