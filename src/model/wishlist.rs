//! Wishlist domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{dto::wishlist::WishlistDto, model::patch::Patch};

/// A wishlist owned by exactly one user.
///
/// Every user gets a default wishlist at registration time; the default
/// wishlist cannot be deleted. The "fulfilled" wishlist is created lazily by
/// fixed title when the first wish is fulfilled.
#[derive(Debug, Clone, PartialEq)]
pub struct Wishlist {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub is_default: bool,
    pub emoji: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wishlist {
    /// Converts an entity model to a wishlist domain model at the repository boundary.
    pub fn from_entity(entity: entity::wishlist::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            is_public: entity.is_public,
            is_default: entity.is_default,
            emoji: entity.emoji,
            event_date: entity.event_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the wishlist domain model to a DTO for API responses.
    pub fn into_dto(self) -> WishlistDto {
        WishlistDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            is_public: self.is_public,
            is_default: self.is_default,
            emoji: self.emoji,
            event_date: self.event_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A wishlist as requested by a client, before the owner is resolved.
#[derive(Debug, Clone)]
pub struct NewWishlist {
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub emoji: Option<String>,
    pub event_date: Option<NaiveDate>,
}

/// Parameters for creating a wishlist.
#[derive(Debug, Clone)]
pub struct CreateWishlistParams {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    /// Only set internally (registration, lazy fulfilled list); never
    /// client-controlled.
    pub is_default: bool,
    pub emoji: Option<String>,
    pub event_date: Option<NaiveDate>,
}

/// Parameters for a tri-state partial wishlist update.
///
/// `title` and `is_public` are non-nullable columns, so omission is the only
/// way to leave them unchanged; the nullable fields use `Patch` to separate
/// "omitted" from "explicitly cleared".
#[derive(Debug, Clone, Default)]
pub struct UpdateWishlistParams {
    pub title: Option<String>,
    pub description: Patch<String>,
    pub is_public: Option<bool>,
    pub emoji: Patch<String>,
    pub event_date: Patch<NaiveDate>,
}
