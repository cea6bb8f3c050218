use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_user_table::User,
    m20250601_000002_create_wishlist_table::Wishlist,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wish::Table)
                    .if_not_exists()
                    .col(pk_uuid(Wish::Id))
                    .col(uuid(Wish::WishlistId))
                    .col(string(Wish::Title))
                    .col(string_null(Wish::Subtitle))
                    .col(text_null(Wish::Description))
                    .col(string_null(Wish::Link))
                    .col(string_null(Wish::ImageUrl))
                    .col(double_null(Wish::Price))
                    .col(string_null(Wish::Currency))
                    .col(string_len(Wish::Priority, 16))
                    .col(boolean(Wish::IsBooked))
                    .col(uuid_null(Wish::BookedByUserId))
                    .col(timestamp_with_time_zone(Wish::CreatedAt))
                    .col(timestamp_with_time_zone(Wish::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wish_wishlist_id")
                            .from(Wish::Table, Wish::WishlistId)
                            .to(Wishlist::Table, Wishlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wish_booked_by_user_id")
                            .from(Wish::Table, Wish::BookedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Wish {
    Table,
    Id,
    WishlistId,
    Title,
    Subtitle,
    Description,
    Link,
    ImageUrl,
    Price,
    Currency,
    Priority,
    IsBooked,
    BookedByUserId,
    CreatedAt,
    UpdatedAt,
}
