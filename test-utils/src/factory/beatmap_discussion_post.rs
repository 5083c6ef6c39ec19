//! Beatmap discussion post factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test discussion posts.
pub struct BeatmapDiscussionPostFactory<'a> {
    db: &'a DatabaseConnection,
    beatmap_discussion_id: i32,
    user_id: Option<i32>,
    last_editor_id: Option<i32>,
    message: String,
    system: bool,
    deleted: bool,
}

impl<'a> BeatmapDiscussionPostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, beatmap_discussion_id: i32) -> Self {
        Self {
            db,
            beatmap_discussion_id,
            user_id: None,
            last_editor_id: None,
            message: "reply".to_string(),
            system: false,
            deleted: false,
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn user_id_opt(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn last_editor_id(mut self, last_editor_id: i32) -> Self {
        self.last_editor_id = Some(last_editor_id);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Marks the post as a system post (resolve/reopen record).
    pub fn system(mut self, system: bool) -> Self {
        self.system = system;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::beatmap_discussion_post::Model, DbErr> {
        let now = Utc::now();
        entity::beatmap_discussion_post::ActiveModel {
            beatmap_discussion_id: ActiveValue::Set(self.beatmap_discussion_id),
            user_id: ActiveValue::Set(self.user_id),
            last_editor_id: ActiveValue::Set(self.last_editor_id),
            message: ActiveValue::Set(self.message),
            system: ActiveValue::Set(self.system),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            deleted_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reply by `user_id` in the given discussion.
pub async fn create_post(
    db: &DatabaseConnection,
    beatmap_discussion_id: i32,
    user_id: i32,
) -> Result<entity::beatmap_discussion_post::Model, DbErr> {
    BeatmapDiscussionPostFactory::new(db, beatmap_discussion_id)
        .user_id(user_id)
        .build()
        .await
}
