use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beatmapset::Table)
                    .if_not_exists()
                    .col(pk_auto(Beatmapset::Id))
                    .col(integer(Beatmapset::UserId))
                    .col(string(Beatmapset::Artist))
                    .col(string(Beatmapset::Title))
                    .col(string(Beatmapset::Creator))
                    .col(small_integer(Beatmapset::Approved).default(0))
                    .col(timestamp_with_time_zone_null(Beatmapset::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beatmapset_user_id")
                    .table(Beatmapset::Table)
                    .col(Beatmapset::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beatmapset::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Beatmapset {
    Table,
    Id,
    UserId,
    Artist,
    Title,
    Creator,
    Approved,
    DeletedAt,
}
