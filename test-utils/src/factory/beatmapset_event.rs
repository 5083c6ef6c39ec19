//! Beatmapset event factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test moderation events.
pub struct BeatmapsetEventFactory<'a> {
    db: &'a DatabaseConnection,
    beatmapset_id: i32,
    beatmap_discussion_id: Option<i32>,
    user_id: Option<i32>,
    event_type: String,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> BeatmapsetEventFactory<'a> {
    /// Creates a `nominate` event on the beatmapset.
    pub fn new(db: &'a DatabaseConnection, beatmapset_id: i32) -> Self {
        Self {
            db,
            beatmapset_id,
            beatmap_discussion_id: None,
            user_id: None,
            event_type: "nominate".to_string(),
            comment: None,
            created_at: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn beatmap_discussion_id(mut self, beatmap_discussion_id: i32) -> Self {
        self.beatmap_discussion_id = Some(beatmap_discussion_id);
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::beatmapset_event::Model, DbErr> {
        entity::beatmapset_event::ActiveModel {
            beatmapset_id: ActiveValue::Set(self.beatmapset_id),
            beatmap_discussion_id: ActiveValue::Set(self.beatmap_discussion_id),
            user_id: ActiveValue::Set(self.user_id),
            event_type: ActiveValue::Set(self.event_type),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event of `event_type` performed by `user_id`.
pub async fn create_event(
    db: &DatabaseConnection,
    beatmapset_id: i32,
    user_id: i32,
    event_type: &str,
) -> Result<entity::beatmapset_event::Model, DbErr> {
    BeatmapsetEventFactory::new(db, beatmapset_id)
        .user_id(user_id)
        .event_type(event_type)
        .build()
        .await
}
