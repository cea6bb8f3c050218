//! Wishlist factory for creating test wishlist entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test wishlists with customizable fields.
///
/// Wishlists always belong to a user, so the owning user id is required up
/// front. Everything else defaults to a plain public non-default list.
pub struct WishlistFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    is_public: bool,
    is_default: bool,
    emoji: Option<String>,
}

impl<'a> WishlistFactory<'a> {
    /// Creates a new WishlistFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Wishlist {id}"`
    /// - description: `None`
    /// - is_public: `true`
    /// - is_default: `false`
    /// - emoji: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Wishlist {}", id),
            description: None,
            is_public: true,
            is_default: false,
            emoji: None,
        }
    }

    /// Sets the title for the wishlist.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the wishlist.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the public visibility flag.
    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Sets the default flag.
    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Sets the emoji for the wishlist.
    pub fn emoji(mut self, emoji: Option<String>) -> Self {
        self.emoji = emoji;
        self
    }

    /// Builds and inserts the wishlist entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::wishlist::Model)` - Created wishlist entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::wishlist::Model, DbErr> {
        let now = Utc::now();
        entity::wishlist::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            is_public: ActiveValue::Set(self.is_public),
            is_default: ActiveValue::Set(self.is_default),
            emoji: ActiveValue::Set(self.emoji),
            event_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a wishlist with default values for the given user.
///
/// Shorthand for `WishlistFactory::new(db, user_id).build().await`.
pub async fn create_wishlist(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::wishlist::Model, DbErr> {
    WishlistFactory::new(db, user_id).build().await
}

/// Creates a default wishlist for the given user.
///
/// Shorthand for `WishlistFactory::new(db, user_id).is_default(true).build().await`.
pub async fn create_default_wishlist(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::wishlist::Model, DbErr> {
    WishlistFactory::new(db, user_id)
        .is_default(true)
        .build()
        .await
}
