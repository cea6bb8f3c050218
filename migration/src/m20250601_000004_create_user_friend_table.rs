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
                    .table(UserFriend::Table)
                    .if_not_exists()
                    .col(uuid(UserFriend::UserId))
                    .col(uuid(UserFriend::FriendId))
                    .col(timestamp_with_time_zone(UserFriend::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserFriend::UserId)
                            .col(UserFriend::FriendId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_friend_user_id")
                            .from(UserFriend::Table, UserFriend::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_friend_friend_id")
                            .from(UserFriend::Table, UserFriend::FriendId)
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
            .drop_table(Table::drop().table(UserFriend::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFriend {
    Table,
    UserId,
    FriendId,
    CreatedAt,
}
