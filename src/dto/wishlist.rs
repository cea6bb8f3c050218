use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::patch::Patch;

/// A wishlist as exposed by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct WishlistDto {
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

/// All wishlists of one user.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct WishlistListDto {
    pub wishlists: Vec<WishlistDto>,
    pub total: usize,
}

/// Request body for creating a wishlist.
///
/// `is_default` is intentionally absent: the default flag is assigned by the
/// server at registration time only.
#[derive(Deserialize, ToSchema)]
pub struct CreateWishlistDto {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    pub emoji: Option<String>,
    pub event_date: Option<NaiveDate>,
}

/// Request body for the tri-state partial wishlist update.
///
/// Omitted fields stay unchanged; nullable fields set to `null` are cleared.
#[derive(Deserialize, Default, ToSchema)]
pub struct UpdateWishlistDto {
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    pub is_public: Option<bool>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub emoji: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<NaiveDate>)]
    pub event_date: Patch<NaiveDate>,
}
