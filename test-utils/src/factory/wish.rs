//! Wish factory for creating test wish entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::wish::WishPriority;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test wishes with customizable fields.
///
/// Wishes always belong to a wishlist, so the wishlist id is required up
/// front. Defaults produce an unbooked `just_want` wish without price data.
pub struct WishFactory<'a> {
    db: &'a DatabaseConnection,
    wishlist_id: Uuid,
    title: String,
    price: Option<f64>,
    currency: Option<String>,
    priority: WishPriority,
    is_booked: bool,
    booked_by_user_id: Option<Uuid>,
}

impl<'a> WishFactory<'a> {
    /// Creates a new WishFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Wish {id}"`
    /// - price/currency: `None`
    /// - priority: `JustWant`
    /// - is_booked: `false`, booked_by_user_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `wishlist_id` - Id of the owning wishlist
    pub fn new(db: &'a DatabaseConnection, wishlist_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            wishlist_id,
            title: format!("Wish {}", id),
            price: None,
            currency: None,
            priority: WishPriority::JustWant,
            is_booked: false,
            booked_by_user_id: None,
        }
    }

    /// Sets the title for the wish.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the price and currency for the wish.
    pub fn price(mut self, price: Option<f64>, currency: Option<String>) -> Self {
        self.price = price;
        self.currency = currency;
        self
    }

    /// Sets the priority for the wish.
    pub fn priority(mut self, priority: WishPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the wish as booked by the given user.
    pub fn booked_by(mut self, user_id: Uuid) -> Self {
        self.is_booked = true;
        self.booked_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the wish entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::wish::Model)` - Created wish entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::wish::Model, DbErr> {
        let now = Utc::now();
        entity::wish::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            wishlist_id: ActiveValue::Set(self.wishlist_id),
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            link: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
            currency: ActiveValue::Set(self.currency),
            priority: ActiveValue::Set(self.priority),
            is_booked: ActiveValue::Set(self.is_booked),
            booked_by_user_id: ActiveValue::Set(self.booked_by_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a wish with default values in the given wishlist.
///
/// Shorthand for `WishFactory::new(db, wishlist_id).build().await`.
pub async fn create_wish(
    db: &DatabaseConnection,
    wishlist_id: Uuid,
) -> Result<entity::wish::Model, DbErr> {
    WishFactory::new(db, wishlist_id).build().await
}
