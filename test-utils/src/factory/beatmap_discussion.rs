//! Beatmap discussion factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test discussions.
///
/// By default the discussion also gets a starting post written by its author, like
/// every discussion created through the site.
///
/// # Example
///
/// ```rust,ignore
/// let discussion = BeatmapDiscussionFactory::new(&db, beatmapset.id)
///     .user_id(modder.id)
///     .message_type("problem")
///     .deleted(true)
///     .build()
///     .await?;
/// ```
pub struct BeatmapDiscussionFactory<'a> {
    db: &'a DatabaseConnection,
    beatmapset_id: i32,
    beatmap_id: Option<i32>,
    user_id: Option<i32>,
    message_type: String,
    resolved: bool,
    deleted: bool,
    starting_post: bool,
    created_at: DateTime<Utc>,
}

impl<'a> BeatmapDiscussionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, beatmapset_id: i32) -> Self {
        Self {
            db,
            beatmapset_id,
            beatmap_id: None,
            user_id: None,
            message_type: "suggestion".to_string(),
            resolved: false,
            deleted: false,
            starting_post: true,
            created_at: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn beatmap_id(mut self, beatmap_id: i32) -> Self {
        self.beatmap_id = Some(beatmap_id);
        self
    }

    pub fn message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = message_type.into();
        self
    }

    pub fn resolved(mut self, resolved: bool) -> Self {
        self.resolved = resolved;
        self
    }

    /// Soft deletes the discussion.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Skips creating the starting post.
    pub fn without_starting_post(mut self) -> Self {
        self.starting_post = false;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::beatmap_discussion::Model, DbErr> {
        let discussion = entity::beatmap_discussion::ActiveModel {
            beatmapset_id: ActiveValue::Set(self.beatmapset_id),
            beatmap_id: ActiveValue::Set(self.beatmap_id),
            user_id: ActiveValue::Set(self.user_id),
            message_type: ActiveValue::Set(self.message_type),
            resolved: ActiveValue::Set(self.resolved),
            kudosu_denied: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
            deleted_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            last_post_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if self.starting_post {
            crate::factory::beatmap_discussion_post::BeatmapDiscussionPostFactory::new(
                self.db,
                discussion.id,
            )
            .user_id_opt(discussion.user_id)
            .message("starting post")
            .build()
            .await?;
        }

        Ok(discussion)
    }
}

/// Creates a suggestion on `beatmapset_id` started by `user_id`, with its starting post.
pub async fn create_discussion(
    db: &DatabaseConnection,
    beatmapset_id: i32,
    user_id: i32,
) -> Result<entity::beatmap_discussion::Model, DbErr> {
    BeatmapDiscussionFactory::new(db, beatmapset_id)
        .user_id(user_id)
        .build()
        .await
}
