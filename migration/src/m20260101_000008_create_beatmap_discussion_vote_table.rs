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
                    .table(BeatmapDiscussionVote::Table)
                    .if_not_exists()
                    .col(pk_auto(BeatmapDiscussionVote::Id))
                    .col(integer(BeatmapDiscussionVote::BeatmapDiscussionId))
                    .col(integer(BeatmapDiscussionVote::UserId))
                    .col(integer(BeatmapDiscussionVote::Score))
                    .col(
                        timestamp_with_time_zone(BeatmapDiscussionVote::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(BeatmapDiscussionVote::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beatmap_discussion_vote_discussion_id")
                            .from(
                                BeatmapDiscussionVote::Table,
                                BeatmapDiscussionVote::BeatmapDiscussionId,
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
                    .name("idx_beatmap_discussion_vote_user_id")
                    .table(BeatmapDiscussionVote::Table)
                    .col(BeatmapDiscussionVote::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeatmapDiscussionVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeatmapDiscussionVote {
    Table,
    Id,
    BeatmapDiscussionId,
    UserId,
    Score,
    CreatedAt,
    UpdatedAt,
}
