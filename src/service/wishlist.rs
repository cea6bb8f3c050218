use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::wishlist::WishlistRepository,
    error::AppError,
    model::wishlist::{CreateWishlistParams, NewWishlist, UpdateWishlistParams, Wishlist},
};

/// Title of the wishlist every user gets at registration.
pub const DEFAULT_WISHLIST_TITLE: &str = "Мои желания";
/// Description of the registration-time default wishlist.
pub const DEFAULT_WISHLIST_DESCRIPTION: &str = "Мой основной список желаний";

/// Title of the lazily created list that fulfilled wishes move into.
pub const FULFILLED_WISHLIST_TITLE: &str = "Сбывшиеся мечты";
/// Description of the fulfilled-wishes list.
pub const FULFILLED_WISHLIST_DESCRIPTION: &str = "Мои исполненные желания";
/// Emoji of the fulfilled-wishes list.
pub const FULFILLED_WISHLIST_EMOJI: &str = "✨";

pub struct WishlistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a wishlist owned by the acting user.
    ///
    /// Client-created wishlists are never the default one.
    pub async fn create(&self, telegram_id: i64, param: NewWishlist) -> Result<Wishlist, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Wishlist title must not be empty".to_string(),
            ));
        }

        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        WishlistRepository::new(self.db)
            .create(CreateWishlistParams {
                user_id: acting.id,
                title: param.title,
                description: param.description,
                is_public: param.is_public,
                is_default: false,
                emoji: param.emoji,
                event_date: param.event_date,
            })
            .await
            .map_err(Into::into)
    }

    /// Gets a wishlist by id, enforcing visibility.
    ///
    /// Private wishlists are only visible to their owner.
    pub async fn get_by_id(&self, telegram_id: i64, id: Uuid) -> Result<Wishlist, AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;

        let wishlist = WishlistRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Wishlist not found".to_string()))?;

        if !wishlist.is_public && wishlist.user_id != acting.id {
            return Err(AppError::Forbidden("Wishlist is private".to_string()));
        }

        Ok(wishlist)
    }

    /// Gets all wishlists of a user identified by Telegram id.
    ///
    /// When the viewer is not the owner, private wishlists are filtered out.
    pub async fn get_for_user(
        &self,
        owner_telegram_id: i64,
        viewer_telegram_id: i64,
    ) -> Result<Vec<Wishlist>, AppError> {
        let owner = super::require_user_by_telegram_id(self.db, owner_telegram_id).await?;

        let mut wishlists = WishlistRepository::new(self.db)
            .find_by_user_id(owner.id)
            .await?;

        if owner_telegram_id != viewer_telegram_id {
            wishlists.retain(|wishlist| wishlist.is_public);
        }

        Ok(wishlists)
    }

    /// Applies a tri-state partial update to a wishlist owned by the acting user.
    pub async fn update(
        &self,
        telegram_id: i64,
        id: Uuid,
        param: UpdateWishlistParams,
    ) -> Result<Wishlist, AppError> {
        if let Some(title) = &param.title {
            if title.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "Wishlist title must not be empty".to_string(),
                ));
            }
        }

        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let repo = WishlistRepository::new(self.db);

        let wishlist = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Wishlist not found".to_string()))?;

        if wishlist.user_id != acting.id {
            return Err(AppError::Forbidden(
                "Only the owner can modify this wishlist".to_string(),
            ));
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Wishlist not found".to_string()))
    }

    /// Deletes a wishlist owned by the acting user.
    ///
    /// The registration-time default wishlist cannot be deleted.
    pub async fn delete(&self, telegram_id: i64, id: Uuid) -> Result<(), AppError> {
        let acting = super::require_user_by_telegram_id(self.db, telegram_id).await?;
        let repo = WishlistRepository::new(self.db);

        let wishlist = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Wishlist not found".to_string()))?;

        if wishlist.user_id != acting.id {
            return Err(AppError::Forbidden(
                "Only the owner can delete this wishlist".to_string(),
            ));
        }
        if wishlist.is_default {
            return Err(AppError::Forbidden(
                "Default wishlist cannot be deleted".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Gets or creates the owner's fulfilled-wishes list.
    ///
    /// Looked up by its fixed title; created private with the sparkles emoji on
    /// first use.
    pub(crate) async fn get_or_create_fulfilled(
        &self,
        owner_id: Uuid,
    ) -> Result<Wishlist, AppError> {
        let repo = WishlistRepository::new(self.db);

        if let Some(existing) = repo
            .find_by_user_and_title(owner_id, FULFILLED_WISHLIST_TITLE)
            .await?
        {
            return Ok(existing);
        }

        repo.create(CreateWishlistParams {
            user_id: owner_id,
            title: FULFILLED_WISHLIST_TITLE.to_string(),
            description: Some(FULFILLED_WISHLIST_DESCRIPTION.to_string()),
            is_public: false,
            is_default: false,
            emoji: Some(FULFILLED_WISHLIST_EMOJI.to_string()),
            event_date: None,
        })
        .await
        .map_err(Into::into)
    }
}
