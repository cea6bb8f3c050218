//! Wish domain models and parameters.
//!
//! A wish lives inside exactly one wishlist. Booking state is mutated only
//! through the dedicated book/unbook operations, never through the generic
//! update, so `UpdateWishParams` has no booking fields.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    dto::wish::{WishDto, WishPriorityDto},
    model::patch::Patch,
};

/// How badly the owner wants this wish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WishPriority {
    #[default]
    JustWant,
    ReallyWant,
}

impl WishPriority {
    pub fn from_entity(entity: entity::wish::WishPriority) -> Self {
        match entity {
            entity::wish::WishPriority::JustWant => Self::JustWant,
            entity::wish::WishPriority::ReallyWant => Self::ReallyWant,
        }
    }

    pub fn into_entity(self) -> entity::wish::WishPriority {
        match self {
            Self::JustWant => entity::wish::WishPriority::JustWant,
            Self::ReallyWant => entity::wish::WishPriority::ReallyWant,
        }
    }

    pub fn from_dto(dto: WishPriorityDto) -> Self {
        match dto {
            WishPriorityDto::JustWant => Self::JustWant,
            WishPriorityDto::ReallyWant => Self::ReallyWant,
        }
    }

    pub fn into_dto(self) -> WishPriorityDto {
        match self {
            Self::JustWant => WishPriorityDto::JustWant,
            Self::ReallyWant => WishPriorityDto::ReallyWant,
        }
    }
}

/// A wish with its booking state.
///
/// Invariant: `booked_by_user_id` is `Some` exactly when `is_booked` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct Wish {
    pub id: Uuid,
    pub wishlist_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub priority: WishPriority,
    pub is_booked: bool,
    pub booked_by_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wish {
    /// Converts an entity model to a wish domain model at the repository boundary.
    pub fn from_entity(entity: entity::wish::Model) -> Self {
        Self {
            id: entity.id,
            wishlist_id: entity.wishlist_id,
            title: entity.title,
            subtitle: entity.subtitle,
            description: entity.description,
            link: entity.link,
            image_url: entity.image_url,
            price: entity.price,
            currency: entity.currency,
            priority: WishPriority::from_entity(entity.priority),
            is_booked: entity.is_booked,
            booked_by_user_id: entity.booked_by_user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the wish domain model to a DTO for API responses.
    pub fn into_dto(self) -> WishDto {
        WishDto {
            id: self.id,
            wishlist_id: self.wishlist_id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            link: self.link,
            image_url: self.image_url,
            price: self.price,
            currency: self.currency,
            priority: self.priority.into_dto(),
            is_booked: self.is_booked,
            booked_by_user_id: self.booked_by_user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a wish inside a wishlist.
#[derive(Debug, Clone)]
pub struct CreateWishParams {
    pub wishlist_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub priority: WishPriority,
}

/// Parameters for a tri-state partial wish update.
///
/// `wishlist_id` moves the wish to another wishlist owned by the same user;
/// `title` is non-nullable; the rest can be cleared with an explicit null.
#[derive(Debug, Clone, Default)]
pub struct UpdateWishParams {
    pub wishlist_id: Option<Uuid>,
    pub title: Option<String>,
    pub subtitle: Patch<String>,
    pub description: Patch<String>,
    pub link: Patch<String>,
    pub image_url: Patch<String>,
    pub price: Patch<f64>,
    pub currency: Patch<String>,
    pub priority: Option<WishPriority>,
}
