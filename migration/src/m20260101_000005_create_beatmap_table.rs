use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000004_create_beatmapset_table::Beatmapset;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beatmap::Table)
                    .if_not_exists()
                    .col(pk_auto(Beatmap::Id))
                    .col(integer(Beatmap::BeatmapsetId))
                    .col(string(Beatmap::Version))
                    .col(timestamp_with_time_zone_null(Beatmap::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beatmap_beatmapset_id")
                            .from(Beatmap::Table, Beatmap::BeatmapsetId)
                            .to(Beatmapset::Table, Beatmapset::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beatmap::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Beatmap {
    Table,
    Id,
    BeatmapsetId,
    Version,
    DeletedAt,
}
