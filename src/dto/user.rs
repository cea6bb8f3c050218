use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::patch::Patch;

/// A user as exposed by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub profile_text: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for the idempotent registration endpoint.
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Response of the registration endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserResponseDto {
    pub user: UserDto,
    /// True when this call created the user (and their default wishlist).
    pub is_new_user: bool,
}

/// Request body for the tri-state profile update.
///
/// Omitted fields stay unchanged; nullable fields set to `null` are cleared.
#[derive(Deserialize, Default, ToSchema)]
pub struct UpdateProfileDto {
    pub first_name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub username: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub last_name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub avatar_url: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub profile_text: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<NaiveDate>)]
    pub birth_date: Patch<NaiveDate>,
}

/// Result of a subscribe call.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubscribeResultDto {
    /// False when the edge already existed (the call was a no-op).
    pub created: bool,
}

/// Result of an unsubscribe call.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UnsubscribeResultDto {
    /// False when there was no edge to remove (the call was a no-op).
    pub removed: bool,
}

/// Current subscription state between the acting user and a target user.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubscriptionStateDto {
    pub subscribed: bool,
}
