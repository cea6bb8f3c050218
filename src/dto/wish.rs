use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::patch::Patch;

/// Wish priority on the wire, serialized as `just_want` / `really_want`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WishPriorityDto {
    #[default]
    JustWant,
    ReallyWant,
}

/// A wish as exposed by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct WishDto {
    pub id: Uuid,
    pub wishlist_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub priority: WishPriorityDto,
    pub is_booked: bool,
    pub booked_by_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a wish.
#[derive(Deserialize, ToSchema)]
pub struct CreateWishDto {
    pub wishlist_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub priority: WishPriorityDto,
}

/// Request body for the tri-state partial wish update.
///
/// Booking state is not updatable here; use the book/unbook endpoints.
#[derive(Deserialize, Default, ToSchema)]
pub struct UpdateWishDto {
    pub wishlist_id: Option<Uuid>,
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub subtitle: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub link: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image_url: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Patch<f64>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub currency: Patch<String>,
    pub priority: Option<WishPriorityDto>,
}
