use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000006_create_beatmap_discussion_table::BeatmapDiscussion;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BeatmapDiscussionPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BeatmapDiscussionPost::Id))
                    .col(integer(BeatmapDiscussionPost::BeatmapDiscussionId))
                    .col(integer_null(BeatmapDiscussionPost::UserId))
                    .col(integer_null(BeatmapDiscussionPost::LastEditorId))
                    .col(text(BeatmapDiscussionPost::Message))
                    .col(boolean(BeatmapDiscussionPost::System).default(false))
                    .col(timestamp_with_time_zone_null(BeatmapDiscussionPost::DeletedAt))
                    .col(integer_null(BeatmapDiscussionPost::DeletedById))
                    .col(
                        timestamp_with_time_zone(BeatmapDiscussionPost::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(BeatmapDiscussionPost::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beatmap_discussion_post_discussion_id")
                            .from(
                                BeatmapDiscussionPost::Table,
                                BeatmapDiscussionPost::BeatmapDiscussionId,
                            )
                            .to(BeatmapDiscussion::Table, BeatmapDiscussion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beatmap_discussion_post_user_id")
                    .table(BeatmapDiscussionPost::Table)
                    .col(BeatmapDiscussionPost::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeatmapDiscussionPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeatmapDiscussionPost {
    Table,
    Id,
    BeatmapDiscussionId,
    UserId,
    LastEditorId,
    Message,
    System,
    DeletedAt,
    DeletedById,
    CreatedAt,
    UpdatedAt,
}
