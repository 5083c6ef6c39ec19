//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter handing out unique values so factory defaults never collide.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a mapper, their beatmapset, a modder and a discussion the modder started.
///
/// # Returns
/// - `Ok((mapper, beatmapset, modder, discussion))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_discussion_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::beatmapset::Model,
        entity::user::Model,
        entity::beatmap_discussion::Model,
    ),
    DbErr,
> {
    let mapper = crate::factory::user::create_user(db).await?;
    let beatmapset = crate::factory::beatmapset::create_beatmapset(db, mapper.id).await?;
    let modder = crate::factory::user::create_user(db).await?;
    let discussion =
        crate::factory::beatmap_discussion::create_discussion(db, beatmapset.id, modder.id)
            .await?;

    Ok((mapper, beatmapset, modder, discussion))
}
