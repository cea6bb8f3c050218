//! Wish data repository for database operations.
//!
//! Provides the `WishRepository` for wish CRUD plus the booking state machine.
//! Booking and unbooking are conditional bulk updates filtered on the current
//! booking state, so two concurrent bookers cannot both win: the loser's update
//! matches zero rows.

use crate::model::wish::{CreateWishParams, UpdateWishParams, Wish};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for wish management and booking.
pub struct WishRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishRepository<'a> {
    /// Creates a new WishRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `WishRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new wish inside a wishlist.
    ///
    /// New wishes always start unbooked.
    ///
    /// # Arguments
    /// - `param` - Wish creation parameters including the wishlist id
    ///
    /// # Returns
    /// - `Ok(Wish)` - The created wish
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateWishParams) -> Result<Wish, DbErr> {
        let now = Utc::now();
        let entity = entity::wish::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            wishlist_id: ActiveValue::Set(param.wishlist_id),
            title: ActiveValue::Set(param.title),
            subtitle: ActiveValue::Set(param.subtitle),
            description: ActiveValue::Set(param.description),
            link: ActiveValue::Set(param.link),
            image_url: ActiveValue::Set(param.image_url),
            price: ActiveValue::Set(param.price),
            currency: ActiveValue::Set(param.currency),
            priority: ActiveValue::Set(param.priority.into_entity()),
            is_booked: ActiveValue::Set(false),
            booked_by_user_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Wish::from_entity(entity))
    }

    /// Finds a wish by id.
    ///
    /// # Arguments
    /// - `id` - Wish id
    ///
    /// # Returns
    /// - `Ok(Some(Wish))` - Wish found
    /// - `Ok(None)` - No wish with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Wish>, DbErr> {
        let entity = entity::prelude::Wish::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Wish::from_entity))
    }

    /// Gets all wishes in a wishlist, oldest first.
    ///
    /// # Arguments
    /// - `wishlist_id` - Id of the wishlist
    ///
    /// # Returns
    /// - `Ok(Vec<Wish>)` - Wishes in the wishlist (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_wishlist_id(&self, wishlist_id: Uuid) -> Result<Vec<Wish>, DbErr> {
        let entities = entity::prelude::Wish::find()
            .filter(entity::wish::Column::WishlistId.eq(wishlist_id))
            .order_by_asc(entity::wish::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Wish::from_entity).collect())
    }

    /// Applies a tri-state partial update to a wish.
    ///
    /// Booking columns are never touched here; the book and unbook operations own
    /// them. The updated_at timestamp is always refreshed.
    ///
    /// # Arguments
    /// - `id` - Id of the wish to update
    /// - `param` - Tri-state update parameters
    ///
    /// # Returns
    /// - `Ok(Some(Wish))` - The updated wish
    /// - `Ok(None)` - No wish with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, param: UpdateWishParams) -> Result<Option<Wish>, DbErr> {
        let Some(existing) = entity::prelude::Wish::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(wishlist_id) = param.wishlist_id {
            active.wishlist_id = ActiveValue::Set(wishlist_id);
        }
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        param.subtitle.apply(&mut active.subtitle);
        param.description.apply(&mut active.description);
        param.link.apply(&mut active.link);
        param.image_url.apply(&mut active.image_url);
        param.price.apply(&mut active.price);
        param.currency.apply(&mut active.currency);
        if let Some(priority) = param.priority {
            active.priority = ActiveValue::Set(priority.into_entity());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Wish::from_entity(entity)))
    }

    /// Deletes a wish by id.
    ///
    /// # Arguments
    /// - `id` - Id of the wish to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The wish existed and was deleted
    /// - `Ok(false)` - No wish with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Wish::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Books a wish for a user if it is still unbooked.
    ///
    /// The booking filter includes `is_booked = false`, so when two users race only
    /// one update matches the row.
    ///
    /// # Arguments
    /// - `id` - Id of the wish to book
    /// - `booker_id` - Internal id of the booking user
    ///
    /// # Returns
    /// - `Ok(true)` - The wish was unbooked and is now booked by `booker_id`
    /// - `Ok(false)` - The wish was already booked (or does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn book(&self, id: Uuid, booker_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Wish::update_many()
            .filter(entity::wish::Column::Id.eq(id))
            .filter(entity::wish::Column::IsBooked.eq(false))
            .col_expr(entity::wish::Column::IsBooked, Expr::value(true))
            .col_expr(
                entity::wish::Column::BookedByUserId,
                Expr::value(Some(booker_id)),
            )
            .col_expr(entity::wish::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Releases a booking held by the given user.
    ///
    /// The filter requires the current booker to match, so only the user who booked
    /// the wish can release it at this layer.
    ///
    /// # Arguments
    /// - `id` - Id of the wish to unbook
    /// - `booker_id` - Internal id of the user releasing the booking
    ///
    /// # Returns
    /// - `Ok(true)` - The booking was released
    /// - `Ok(false)` - The wish was not booked by `booker_id` (or does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn unbook(&self, id: Uuid, booker_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Wish::update_many()
            .filter(entity::wish::Column::Id.eq(id))
            .filter(entity::wish::Column::IsBooked.eq(true))
            .filter(entity::wish::Column::BookedByUserId.eq(booker_id))
            .col_expr(entity::wish::Column::IsBooked, Expr::value(false))
            .col_expr(
                entity::wish::Column::BookedByUserId,
                Expr::value(None::<Uuid>),
            )
            .col_expr(entity::wish::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves a wish into another wishlist, clearing any booking.
    ///
    /// Used when fulfilling a wish: the wish moves into the fulfilled list and the
    /// booking is released so the booker's view stays consistent.
    ///
    /// # Arguments
    /// - `id` - Id of the wish to move
    /// - `target_wishlist_id` - Id of the destination wishlist
    ///
    /// # Returns
    /// - `Ok(Some(Wish))` - The moved wish
    /// - `Ok(None)` - No wish with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn move_to_wishlist(
        &self,
        id: Uuid,
        target_wishlist_id: Uuid,
    ) -> Result<Option<Wish>, DbErr> {
        let Some(existing) = entity::prelude::Wish::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.wishlist_id = ActiveValue::Set(target_wishlist_id);
        active.is_booked = ActiveValue::Set(false);
        active.booked_by_user_id = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Wish::from_entity(entity)))
    }
}
