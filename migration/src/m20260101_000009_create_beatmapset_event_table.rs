use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000004_create_beatmapset_table::Beatmapset,
    m20260101_000006_create_beatmap_discussion_table::BeatmapDiscussion,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BeatmapsetEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(BeatmapsetEvent::Id))
                    .col(integer(BeatmapsetEvent::BeatmapsetId))
                    .col(integer_null(BeatmapsetEvent::BeatmapDiscussionId))
                    .col(integer_null(BeatmapsetEvent::UserId))
                    .col(string(BeatmapsetEvent::Type))
                    .col(text_null(BeatmapsetEvent::Comment))
                    .col(
                        timestamp_with_time_zone(BeatmapsetEvent::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beatmapset_event_beatmapset_id")
                            .from(BeatmapsetEvent::Table, BeatmapsetEvent::BeatmapsetId)
                            .to(Beatmapset::Table, Beatmapset::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beatmapset_event_discussion_id")
                            .from(BeatmapsetEvent::Table, BeatmapsetEvent::BeatmapDiscussionId)
                            .to(BeatmapDiscussion::Table, BeatmapDiscussion::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beatmapset_event_user_id")
                    .table(BeatmapsetEvent::Table)
                    .col(BeatmapsetEvent::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeatmapsetEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeatmapsetEvent {
    Table,
    Id,
    BeatmapsetId,
    BeatmapDiscussionId,
    UserId,
    Type,
    Comment,
    CreatedAt,
}
