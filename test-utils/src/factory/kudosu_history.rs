//! Kudosu history factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a `vote.give` exchange of one kudosu for a beatmap discussion.
///
/// # Arguments
/// - `receiver_id` - User receiving the kudosu
/// - `giver_id` - User whose vote triggered it, if any
/// - `beatmap_discussion_id` - Discussion the kudosu was awarded for
pub async fn create_kudosu(
    db: &DatabaseConnection,
    receiver_id: i32,
    giver_id: Option<i32>,
    beatmap_discussion_id: i32,
) -> Result<entity::kudosu_history::Model, DbErr> {
    entity::kudosu_history::ActiveModel {
        receiver_id: ActiveValue::Set(receiver_id),
        giver_id: ActiveValue::Set(giver_id),
        amount: ActiveValue::Set(1),
        action: ActiveValue::Set("vote.give".to_string()),
        kudosuable_type: ActiveValue::Set("beatmap_discussion".to_string()),
        kudosuable_id: ActiveValue::Set(beatmap_discussion_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
