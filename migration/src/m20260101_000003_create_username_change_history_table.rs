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
                    .table(UsernameChangeHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(UsernameChangeHistory::ChangeId))
                    .col(integer(UsernameChangeHistory::UserId))
                    .col(string(UsernameChangeHistory::Username))
                    .col(string(UsernameChangeHistory::UsernameLast))
                    .col(string(UsernameChangeHistory::Type))
                    .col(
                        timestamp_with_time_zone(UsernameChangeHistory::Timestamp)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_username_change_history_user_id")
                            .from(UsernameChangeHistory::Table, UsernameChangeHistory::UserId)
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
                    .name("idx_username_change_history_username_last")
                    .table(UsernameChangeHistory::Table)
                    .col(UsernameChangeHistory::UsernameLast)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsernameChangeHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UsernameChangeHistory {
    Table,
    ChangeId,
    UserId,
    Username,
    UsernameLast,
    Type,
    Timestamp,
}
