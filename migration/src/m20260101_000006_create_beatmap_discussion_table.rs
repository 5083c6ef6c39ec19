use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000004_create_beatmapset_table::Beatmapset,
    m20260101_000005_create_beatmap_table::Beatmap,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BeatmapDiscussion::Table)
                    .if_not_exists()
                    .col(pk_auto(BeatmapDiscussion::Id))
                    .col(integer(BeatmapDiscussion::BeatmapsetId))
                    .col(integer_null(BeatmapDiscussion::BeatmapId))
                    .col(integer_null(BeatmapDiscussion::UserId))
                    .col(string(BeatmapDiscussion::MessageType))
                    .col(boolean(BeatmapDiscussion::Resolved).default(false))
                    .col(boolean(BeatmapDiscussion::KudosuDenied).default(false))
                    .col(timestamp_with_time_zone_null(BeatmapDiscussion::DeletedAt))
                    .col(integer_null(BeatmapDiscussion::DeletedById))
                    .col(
                        timestamp_with_time_zone(BeatmapDiscussion::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(BeatmapDiscussion::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(BeatmapDiscussion::LastPostAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beatmap_discussion_beatmapset_id")
                            .from(BeatmapDiscussion::Table, BeatmapDiscussion::BeatmapsetId)
                            .to(Beatmapset::Table, Beatmapset::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beatmap_discussion_beatmap_id")
                            .from(BeatmapDiscussion::Table, BeatmapDiscussion::BeatmapId)
                            .to(Beatmap::Table, Beatmap::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beatmap_discussion_user_id")
                    .table(BeatmapDiscussion::Table)
                    .col(BeatmapDiscussion::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeatmapDiscussion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeatmapDiscussion {
    Table,
    Id,
    BeatmapsetId,
    BeatmapId,
    UserId,
    MessageType,
    Resolved,
    KudosuDenied,
    DeletedAt,
    DeletedById,
    CreatedAt,
    UpdatedAt,
    LastPostAt,
}
