use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{wish::WishRepository, wishlist::WishlistRepository},
    error::AppError,
    model::{
        wish::{CreateWishParams, UpdateWishParams, Wish},
        wishlist::Wishlist,
    },
    service::wishlist::WishlistService,
};

/// Currency assigned to new wishes that do not specify one.
pub const DEFAULT_CURRENCY: &str = "RUB";

pub struct WishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a wish in a wishlist owned by the acting user.
    pub async fn create(
        &self,
        telegram_id: i64,
        mut param: CreateWishParams,
    ) -> Result<Wish, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Wish title must not be empty".to_string(),
            ));
        }
        if param.currency.is_none() {
            param.currency = Some(DEFAULT_CURRENCY.to_string());
        }

        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let wishlist = self.require_wishlist(param.wishlist_id).await?;

        if wishlist.user_id != acting.id {
            return Err(AppError::Forbidden(
                "Only the owner can add wishes to this wishlist".to_string(),
            ));
        }

        WishRepository::new(self.db)
            .create(param)
            .await
            .map_err(Into::into)
    }

    /// Gets a wish by id, enforcing the parent wishlist's visibility.
    pub async fn get_by_id(&self, telegram_id: i64, id: Uuid) -> Result<Wish, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        let wish = self.require_wish(id).await?;
        let wishlist = self.require_wishlist(wish.wishlist_id).await?;

        if !wishlist.is_public && wishlist.user_id != acting.id {
            return Err(AppError::Forbidden("Wishlist is private".to_string()));
        }

        Ok(wish)
    }

    /// Gets all wishes of a wishlist, enforcing its visibility.
    pub async fn get_by_wishlist(
        &self,
        telegram_id: i64,
        wishlist_id: Uuid,
    ) -> Result<Vec<Wish>, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let wishlist = self.require_wishlist(wishlist_id).await?;

        if !wishlist.is_public && wishlist.user_id != acting.id {
            return Err(AppError::Forbidden("Wishlist is private".to_string()));
        }

        WishRepository::new(self.db)
            .find_by_wishlist_id(wishlist_id)
            .await
            .map_err(Into::into)
    }

    /// Applies a tri-state partial update to a wish owned by the acting user.
    ///
    /// Moving the wish to another wishlist requires the target to belong to the
    /// same owner.
    pub async fn update(
        &self,
        telegram_id: i64,
        id: Uuid,
        param: UpdateWishParams,
    ) -> Result<Wish, AppError> {
        if let Some(title) = &param.title {
            if title.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "Wish title must not be empty".to_string(),
                ));
            }
        }

        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let wish = self.require_wish(id).await?;
        let wishlist = self.require_wishlist(wish.wishlist_id).await?;

        if wishlist.user_id != acting.id {
            return Err(AppError::Forbidden(
                "Only the owner can modify this wish".to_string(),
            ));
        }

        if let Some(target_id) = param.wishlist_id {
            let target = self.require_wishlist(target_id).await?;
            if target.user_id != acting.id {
                return Err(AppError::Forbidden(
                    "Cannot move a wish into another user's wishlist".to_string(),
                ));
            }
        }

        WishRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Wish not found".to_string()))
    }

    /// Deletes a wish owned by the acting user.
    pub async fn delete(&self, telegram_id: i64, id: Uuid) -> Result<(), AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let wish = self.require_wish(id).await?;
        let wishlist = self.require_wishlist(wish.wishlist_id).await?;

        if wishlist.user_id != acting.id {
            return Err(AppError::Forbidden(
                "Only the owner can delete this wish".to_string(),
            ));
        }

        WishRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Books a wish for the acting user.
    ///
    /// Owners cannot book their own wishes. Losing a booking race surfaces as a
    /// conflict, not a silent overwrite.
    pub async fn book(&self, telegram_id: i64, id: Uuid) -> Result<Wish, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let wish = self.require_wish(id).await?;
        let wishlist = self.require_wishlist(wish.wishlist_id).await?;

        if wishlist.user_id == acting.id {
            return Err(AppError::Forbidden(
                "Cannot book your own wish".to_string(),
            ));
        }

        let repo = WishRepository::new(self.db);
        if !repo.book(id, acting.id).await? {
            return Err(AppError::Conflict("Wish is already booked".to_string()));
        }

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Wish not found".to_string()))
    }

    /// Releases the acting user's booking on a wish.
    pub async fn unbook(&self, telegram_id: i64, id: Uuid) -> Result<Wish, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let wish = self.require_wish(id).await?;

        if !wish.is_booked {
            return Err(AppError::BadRequest("Wish is not booked".to_string()));
        }
        if wish.booked_by_user_id != Some(acting.id) {
            return Err(AppError::Forbidden(
                "Only the booker can release this booking".to_string(),
            ));
        }

        let repo = WishRepository::new(self.db);
        if !repo.unbook(id, acting.id).await? {
            return Err(AppError::Conflict(
                "Booking changed while releasing it".to_string(),
            ));
        }

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Wish not found".to_string()))
    }

    /// Moves a wish into the owner's fulfilled-wishes list.
    ///
    /// Creates the fulfilled list on first use and clears any booking on the
    /// wish. Only the owner can fulfill their wishes.
    pub async fn fulfill(&self, telegram_id: i64, id: Uuid) -> Result<Wish, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let wish = self.require_wish(id).await?;
        let wishlist = self.require_wishlist(wish.wishlist_id).await?;

        if wishlist.user_id != acting.id {
            return Err(AppError::Forbidden(
                "Only the owner can fulfill this wish".to_string(),
            ));
        }

        let fulfilled = WishlistService::new(self.db)
            .get_or_create_fulfilled(acting.id)
            .await?;

        if wish.wishlist_id == fulfilled.id {
            return Err(AppError::BadRequest(
                "Wish is already fulfilled".to_string(),
            ));
        }

        WishRepository::new(self.db)
            .move_to_wishlist(id, fulfilled.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Wish not found".to_string()))
    }

    async fn require_wish(&self, id: Uuid) -> Result<Wish, AppError> {
        WishRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Wish not found".to_string()))
    }

    async fn require_wishlist(&self, id: Uuid) -> Result<Wishlist, AppError> {
        WishlistRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Wishlist not found".to_string()))
    }
}
