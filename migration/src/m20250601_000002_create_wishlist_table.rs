use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishlist::Table)
                    .if_not_exists()
                    .col(pk_uuid(Wishlist::Id))
                    .col(uuid(Wishlist::UserId))
                    .col(string(Wishlist::Title))
                    .col(text_null(Wishlist::Description))
                    .col(boolean(Wishlist::IsPublic))
                    .col(boolean(Wishlist::IsDefault))
                    .col(string_null(Wishlist::Emoji))
                    .col(date_null(Wishlist::EventDate))
                    .col(timestamp_with_time_zone(Wishlist::CreatedAt))
                    .col(timestamp_with_time_zone(Wishlist::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_user_id")
                            .from(Wishlist::Table, Wishlist::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wishlist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Wishlist {
    Table,
    Id,
    UserId,
    Title,
    Description,
    IsPublic,
    IsDefault,
    Emoji,
    EventDate,
    CreatedAt,
    UpdatedAt,
}
