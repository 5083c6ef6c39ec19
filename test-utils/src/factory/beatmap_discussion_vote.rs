//! Beatmap discussion vote factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test votes.
pub struct BeatmapDiscussionVoteFactory<'a> {
    db: &'a DatabaseConnection,
    beatmap_discussion_id: i32,
    user_id: i32,
    score: i32,
    created_at: DateTime<Utc>,
}

impl<'a> BeatmapDiscussionVoteFactory<'a> {
    /// Creates an upvote by `user_id` cast now.
    pub fn new(db: &'a DatabaseConnection, beatmap_discussion_id: i32, user_id: i32) -> Self {
        Self {
            db,
            beatmap_discussion_id,
            user_id,
            score: 1,
            created_at: Utc::now(),
        }
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::beatmap_discussion_vote::Model, DbErr> {
        entity::beatmap_discussion_vote::ActiveModel {
            beatmap_discussion_id: ActiveValue::Set(self.beatmap_discussion_id),
            user_id: ActiveValue::Set(self.user_id),
            score: ActiveValue::Set(self.score),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upvote by `user_id` on the given discussion.
pub async fn create_vote(
    db: &DatabaseConnection,
    beatmap_discussion_id: i32,
    user_id: i32,
) -> Result<entity::beatmap_discussion_vote::Model, DbErr> {
    BeatmapDiscussionVoteFactory::new(db, beatmap_discussion_id, user_id)
        .build()
        .await
}
