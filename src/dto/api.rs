use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Error payload returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Query parameter identifying the acting user.
///
/// The Mini App and the bot act on behalf of a Telegram user; endpoints that
/// mutate state take that user's Telegram id as a query parameter.
#[derive(Deserialize, IntoParams)]
pub struct ActingUserQuery {
    /// Telegram id of the acting user.
    pub telegram_id: i64,
}

/// Query parameters for listing wishes of a wishlist.
#[derive(Deserialize, IntoParams)]
pub struct ListWishesQuery {
    /// Id of the wishlist whose wishes to list.
    pub wishlist_id: Uuid,
    /// Telegram id of the acting user.
    pub telegram_id: i64,
}

/// Query parameters for user search.
#[derive(Deserialize, IntoParams)]
pub struct SearchUsersQuery {
    /// Substring to match against username, first name, and last name.
    pub q: String,
    /// Telegram id of the acting user, excluded from results.
    pub telegram_id: i64,
}
