use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{friend::FriendRepository, user::UserRepository},
    error::AppError,
    model::user::User,
    service::birthday,
};

pub struct FriendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes the acting user to another user's wishlists.
    ///
    /// Idempotent: subscribing twice reports `false` the second time.
    pub async fn subscribe(&self, telegram_id: i64, target_id: Uuid) -> Result<bool, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        if acting.id == target_id {
            return Err(AppError::BadRequest(
                "Cannot subscribe to yourself".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        FriendRepository::new(self.db)
            .subscribe(acting.id, target_id)
            .await
            .map_err(Into::into)
    }

    /// Unsubscribes the acting user from another user.
    ///
    /// A missing subscription is a no-op reported as `false`.
    pub async fn unsubscribe(&self, telegram_id: i64, target_id: Uuid) -> Result<bool, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        FriendRepository::new(self.db)
            .unsubscribe(acting.id, target_id)
            .await
            .map_err(Into::into)
    }

    /// Checks whether the acting user is subscribed to a target user.
    pub async fn is_subscribed(&self, telegram_id: i64, target_id: Uuid) -> Result<bool, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        FriendRepository::new(self.db)
            .is_subscribed(acting.id, target_id)
            .await
            .map_err(Into::into)
    }

    /// Gets the users the acting user follows, ordered by upcoming birthday.
    ///
    /// Friends without a birth date come last.
    pub async fn get_friends(&self, telegram_id: i64) -> Result<Vec<User>, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        let mut friends = FriendRepository::new(self.db).get_followed(acting.id).await?;
        birthday::sort_by_upcoming_birthday(&mut friends, Utc::now().date_naive());

        Ok(friends)
    }
}
