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
                    .col(pk_uuid(User::Id))
                    .col(big_integer_uniq(User::TelegramId))
                    .col(string_null(User::Username))
                    .col(string(User::FirstName))
                    .col(string_null(User::LastName))
                    .col(string_null(User::AvatarUrl))
                    .col(text_null(User::ProfileText))
                    .col(date_null(User::BirthDate))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
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
    TelegramId,
    Username,
    FirstName,
    LastName,
    AvatarUrl,
    ProfileText,
    BirthDate,
    CreatedAt,
    UpdatedAt,
}
