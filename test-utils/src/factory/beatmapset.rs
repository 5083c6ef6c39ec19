//! Beatmapset factory for creating test beatmapsets.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test beatmapsets with customizable fields.
pub struct BeatmapsetFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    artist: String,
    title: String,
    approved: i16,
    deleted: bool,
}

impl<'a> BeatmapsetFactory<'a> {
    /// Creates a pending beatmapset owned by `user_id`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            artist: format!("Artist {}", id),
            title: format!("Title {}", id),
            approved: 0,
            deleted: false,
        }
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the ranked status (-2 graveyard through 4 loved).
    pub fn approved(mut self, approved: i16) -> Self {
        self.approved = approved;
        self
    }

    /// Soft deletes the beatmapset.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::beatmapset::Model, DbErr> {
        entity::beatmapset::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            artist: ActiveValue::Set(self.artist),
            title: ActiveValue::Set(self.title),
            creator: ActiveValue::Set(format!("user_{}", self.user_id)),
            approved: ActiveValue::Set(self.approved),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending beatmapset owned by `user_id`.
pub async fn create_beatmapset(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::beatmapset::Model, DbErr> {
    BeatmapsetFactory::new(db, user_id).build().await
}
