//! Beatmap factory for creating difficulties within a beatmapset.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a difficulty named `"Insane {id}"` in the given beatmapset.
pub async fn create_beatmap(
    db: &DatabaseConnection,
    beatmapset_id: i32,
) -> Result<entity::beatmap::Model, DbErr> {
    entity::beatmap::ActiveModel {
        beatmapset_id: ActiveValue::Set(beatmapset_id),
        version: ActiveValue::Set(format!("Insane {}", next_id())),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
