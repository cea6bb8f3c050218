//! Friend subscription data repository.
//!
//! Manages the directed follow edges between users. Subscriptions are stored as
//! composite-key rows, so idempotency falls out of the primary key: inserting an
//! existing edge is a no-op and deleting a missing edge affects zero rows.

use crate::model::user::User;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

/// Repository providing database operations for friend subscriptions.
pub struct FriendRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendRepository<'a> {
    /// Creates a new FriendRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FriendRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a follow edge from one user to another.
    ///
    /// Idempotent: inserting an edge that already exists leaves the table unchanged
    /// and reports `false`.
    ///
    /// # Arguments
    /// - `user_id` - The following user
    /// - `friend_id` - The user being followed
    ///
    /// # Returns
    /// - `Ok(true)` - A new edge was created
    /// - `Ok(false)` - The edge already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn subscribe(&self, user_id: Uuid, friend_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::UserFriend::insert(entity::user_friend::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            friend_id: ActiveValue::Set(friend_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_friend::Column::UserId,
                entity::user_friend::Column::FriendId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec(self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Removes a follow edge.
    ///
    /// # Arguments
    /// - `user_id` - The following user
    /// - `friend_id` - The user being followed
    ///
    /// # Returns
    /// - `Ok(true)` - The edge existed and was removed
    /// - `Ok(false)` - There was no edge to remove
    /// - `Err(DbErr)` - Database error during delete
    pub async fn unsubscribe(&self, user_id: Uuid, friend_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::UserFriend::delete_many()
            .filter(entity::user_friend::Column::UserId.eq(user_id))
            .filter(entity::user_friend::Column::FriendId.eq(friend_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a follow edge exists.
    ///
    /// # Arguments
    /// - `user_id` - The following user
    /// - `friend_id` - The user being followed
    ///
    /// # Returns
    /// - `Ok(true)` - The edge exists
    /// - `Ok(false)` - The edge does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_subscribed(&self, user_id: Uuid, friend_id: Uuid) -> Result<bool, DbErr> {
        let edge = entity::prelude::UserFriend::find_by_id((user_id, friend_id))
            .one(self.db)
            .await?;

        Ok(edge.is_some())
    }

    /// Gets all users the given user follows.
    ///
    /// Joins through the follow edges and returns the followed users' full records,
    /// ordered alphabetically by first name. The caller reorders by birthday.
    ///
    /// # Arguments
    /// - `user_id` - The following user
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Followed users (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_followed(&self, user_id: Uuid) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .join(
                JoinType::InnerJoin,
                entity::user_friend::Relation::Followee.def().rev(),
            )
            .filter(entity::user_friend::Column::UserId.eq(user_id))
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
