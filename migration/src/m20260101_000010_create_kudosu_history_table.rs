use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KudosuHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(KudosuHistory::ExchangeId))
                    .col(integer(KudosuHistory::ReceiverId))
                    .col(integer_null(KudosuHistory::GiverId))
                    .col(integer(KudosuHistory::Amount))
                    .col(string(KudosuHistory::Action))
                    .col(string(KudosuHistory::KudosuableType))
                    .col(integer(KudosuHistory::KudosuableId))
                    .col(
                        timestamp_with_time_zone(KudosuHistory::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kudosu_history_receiver_id")
                            .from(KudosuHistory::Table, KudosuHistory::ReceiverId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_kudosu_history_receiver_id")
                    .table(KudosuHistory::Table)
                    .col(KudosuHistory::ReceiverId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KudosuHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KudosuHistory {
    Table,
    ExchangeId,
    ReceiverId,
    GiverId,
    Amount,
    Action,
    KudosuableType,
    KudosuableId,
    CreatedAt,
}
