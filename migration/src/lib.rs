pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_user_group_table;
mod m20260101_000003_create_username_change_history_table;
mod m20260101_000004_create_beatmapset_table;
mod m20260101_000005_create_beatmap_table;
mod m20260101_000006_create_beatmap_discussion_table;
mod m20260101_000007_create_beatmap_discussion_post_table;
mod m20260101_000008_create_beatmap_discussion_vote_table;
mod m20260101_000009_create_beatmapset_event_table;
mod m20260101_000010_create_kudosu_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_user_group_table::Migration),
            Box::new(m20260101_000003_create_username_change_history_table::Migration),
            Box::new(m20260101_000004_create_beatmapset_table::Migration),
            Box::new(m20260101_000005_create_beatmap_table::Migration),
            Box::new(m20260101_000006_create_beatmap_discussion_table::Migration),
            Box::new(m20260101_000007_create_beatmap_discussion_post_table::Migration),
            Box::new(m20260101_000008_create_beatmap_discussion_vote_table::Migration),
            Box::new(m20260101_000009_create_beatmapset_event_table::Migration),
            Box::new(m20260101_000010_create_kudosu_history_table::Migration),
        ]
    }
}
