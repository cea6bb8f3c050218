//! Wishlist data repository for database operations.
//!
//! Provides the `WishlistRepository` for creating, reading, updating, and deleting
//! wishlists. Lookup by owner and title backs the lazily created fulfilled list.

use crate::model::wishlist::{CreateWishlistParams, UpdateWishlistParams, Wishlist};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for wishlist management.
pub struct WishlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistRepository<'a> {
    /// Creates a new WishlistRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `WishlistRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new wishlist.
    ///
    /// # Arguments
    /// - `param` - Wishlist creation parameters including the owner's user id
    ///
    /// # Returns
    /// - `Ok(Wishlist)` - The created wishlist
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateWishlistParams) -> Result<Wishlist, DbErr> {
        let now = Utc::now();
        let entity = entity::wishlist::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            is_public: ActiveValue::Set(param.is_public),
            is_default: ActiveValue::Set(param.is_default),
            emoji: ActiveValue::Set(param.emoji),
            event_date: ActiveValue::Set(param.event_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Wishlist::from_entity(entity))
    }

    /// Finds a wishlist by id.
    ///
    /// # Arguments
    /// - `id` - Wishlist id
    ///
    /// # Returns
    /// - `Ok(Some(Wishlist))` - Wishlist found
    /// - `Ok(None)` - No wishlist with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Wishlist>, DbErr> {
        let entity = entity::prelude::Wishlist::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Wishlist::from_entity))
    }

    /// Gets all wishlists owned by a user, oldest first.
    ///
    /// The default wishlist is created first at registration time, so this
    /// ordering puts it at the top.
    ///
    /// # Arguments
    /// - `user_id` - Internal id of the owner
    ///
    /// # Returns
    /// - `Ok(Vec<Wishlist>)` - The user's wishlists (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Wishlist>, DbErr> {
        let entities = entity::prelude::Wishlist::find()
            .filter(entity::wishlist::Column::UserId.eq(user_id))
            .order_by_asc(entity::wishlist::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Wishlist::from_entity).collect())
    }

    /// Finds a wishlist by owner and exact title.
    ///
    /// Backs the lazily created fulfilled-wishes list, which is looked up by its
    /// fixed title before being created.
    ///
    /// # Arguments
    /// - `user_id` - Internal id of the owner
    /// - `title` - Exact wishlist title
    ///
    /// # Returns
    /// - `Ok(Some(Wishlist))` - Wishlist found
    /// - `Ok(None)` - The user has no wishlist with that title
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_and_title(
        &self,
        user_id: Uuid,
        title: &str,
    ) -> Result<Option<Wishlist>, DbErr> {
        let entity = entity::prelude::Wishlist::find()
            .filter(entity::wishlist::Column::UserId.eq(user_id))
            .filter(entity::wishlist::Column::Title.eq(title))
            .one(self.db)
            .await?;

        Ok(entity.map(Wishlist::from_entity))
    }

    /// Applies a tri-state partial update to a wishlist.
    ///
    /// Omitted fields stay unchanged, explicit nulls clear nullable columns, and
    /// provided values overwrite. The updated_at timestamp is always refreshed.
    ///
    /// # Arguments
    /// - `id` - Id of the wishlist to update
    /// - `param` - Tri-state update parameters
    ///
    /// # Returns
    /// - `Ok(Some(Wishlist))` - The updated wishlist
    /// - `Ok(None)` - No wishlist with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        param: UpdateWishlistParams,
    ) -> Result<Option<Wishlist>, DbErr> {
        let Some(existing) = entity::prelude::Wishlist::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        param.description.apply(&mut active.description);
        if let Some(is_public) = param.is_public {
            active.is_public = ActiveValue::Set(is_public);
        }
        param.emoji.apply(&mut active.emoji);
        param.event_date.apply(&mut active.event_date);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Wishlist::from_entity(entity)))
    }

    /// Deletes a wishlist by id.
    ///
    /// Wishes inside the wishlist are removed by the cascading foreign key.
    ///
    /// # Arguments
    /// - `id` - Id of the wishlist to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The wishlist existed and was deleted
    /// - `Ok(false)` - No wishlist with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Wishlist::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
