use sea_orm::DatabaseConnection;

use crate::{
    data::{user::UserRepository, wishlist::WishlistRepository},
    error::AppError,
    model::{
        user::{RegisterUserParams, RegisteredUser, SearchUsersParams, UpdateProfileParams, User},
        wishlist::CreateWishlistParams,
    },
    service::wishlist::{DEFAULT_WISHLIST_DESCRIPTION, DEFAULT_WISHLIST_TITLE},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user or refreshes their Telegram profile fields.
    ///
    /// Idempotent: the first call creates the user together with their default
    /// wishlist, every later call with the same Telegram id only updates the
    /// profile fields and reports `is_new_user: false`.
    pub async fn register(&self, params: RegisterUserParams) -> Result<RegisteredUser, AppError> {
        if params.first_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "First name must not be empty".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        let is_new_user = user_repo
            .find_by_telegram_id(params.telegram_id)
            .await?
            .is_none();

        let user = user_repo.upsert(params).await?;

        if is_new_user {
            WishlistRepository::new(self.db)
                .create(CreateWishlistParams {
                    user_id: user.id,
                    title: DEFAULT_WISHLIST_TITLE.to_string(),
                    description: Some(DEFAULT_WISHLIST_DESCRIPTION.to_string()),
                    is_public: true,
                    is_default: true,
                    emoji: None,
                    event_date: None,
                })
                .await?;
        }

        Ok(RegisteredUser { user, is_new_user })
    }

    /// Gets a user by Telegram id.
    pub async fn get_by_telegram_id(&self, telegram_id: i64) -> Result<User, AppError> {
        super::require_user_by_telegram_id(self.db, telegram_id).await
    }

    /// Applies a tri-state partial update to the acting user's profile.
    pub async fn update_profile(
        &self,
        telegram_id: i64,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        if let Some(first_name) = &params.first_name {
            if first_name.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "First name must not be empty".to_string(),
                ));
            }
        }

        let user = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        UserRepository::new(self.db)
            .update_profile(user.id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Searches other users by username or name.
    pub async fn search(&self, telegram_id: i64, query: &str) -> Result<Vec<User>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest(
                "Search query must not be empty".to_string(),
            ));
        }

        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        UserRepository::new(self.db)
            .search(SearchUsersParams {
                query: query.to_string(),
                exclude_user_id: acting.id,
            })
            .await
            .map_err(Into::into)
    }
}
