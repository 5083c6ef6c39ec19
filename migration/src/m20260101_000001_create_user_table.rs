use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Username))
                    .col(string(User::UsernameClean))
                    .col(small_integer(User::UserType).default(0))
                    .col(small_integer(User::UserWarnings).default(0))
                    .col(string(User::Playmode).default("osu"))
                    .col(string(User::CountryAcronym).default("XX"))
                    .col(integer(User::KudosuTotal).default(0))
                    .col(integer(User::KudosuAvailable).default(0))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_username_clean")
                    .table(User::Table)
                    .col(User::UsernameClean)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    UsernameClean,
    UserType,
    UserWarnings,
    Playmode,
    CountryAcronym,
    KudosuTotal,
    KudosuAvailable,
    CreatedAt,
}
