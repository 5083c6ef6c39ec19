use crate::{
    model::discussion::BeatmapDiscussionPostDto,
    server::model::{discussion::DiscussionWithRelations, user::User},
};

/// Which kinds of posts a post search returns.
pub const POST_TYPES: &[&str] = &["first", "reply", "system"];

/// Used when a search names no known post type.
pub const DEFAULT_POST_TYPE: &str = "reply";

/// Keeps the known post types from a search, defaulting to replies.
pub fn normalize_post_types(types: &[String]) -> Vec<&'static str> {
    let known: Vec<&'static str> = POST_TYPES
        .iter()
        .copied()
        .filter(|known| types.iter().any(|requested| requested == known))
        .collect();

    if known.is_empty() {
        vec![DEFAULT_POST_TYPE]
    } else {
        known
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostWithRelations {
    pub post: entity::beatmap_discussion_post::Model,
    pub user: Option<User>,
    pub discussion: Option<DiscussionWithRelations>,
}

impl PostWithRelations {
    pub fn new(post: entity::beatmap_discussion_post::Model) -> Self {
        Self {
            post,
            user: None,
            discussion: None,
        }
    }

    pub fn into_dto(self) -> BeatmapDiscussionPostDto {
        let post = self.post;

        BeatmapDiscussionPostDto {
            id: post.id,
            beatmap_discussion_id: post.beatmap_discussion_id,
            user_id: post.user_id,
            last_editor_id: post.last_editor_id,
            message: post.message,
            system: post.system,
            deleted_at: post.deleted_at,
            deleted_by_id: post.deleted_by_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
            user: self.user.map(|user| user.to_compact_dto(false)),
            beatmap_discussion: self
                .discussion
                .map(|discussion| Box::new(discussion.into_dto())),
        }
    }
}
