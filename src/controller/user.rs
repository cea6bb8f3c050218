use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    dto::{
        api::{ActingUserQuery, ErrorDto, SearchUsersQuery},
        user::{
            RegisterUserDto, RegisterUserResponseDto, SubscribeResultDto, SubscriptionStateDto,
            UnsubscribeResultDto, UpdateProfileDto, UserDto,
        },
    },
    error::AppError,
    model::user::{RegisterUserParams, UpdateProfileParams},
    service::{friend::FriendService, user::UserService},
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a user or refresh their Telegram profile.
///
/// Idempotent entry point called by the bot and the Mini App on every launch.
/// The first call for a Telegram id creates the user together with their
/// default wishlist.
///
/// # Returns
/// - `200 OK` - User registered or refreshed, with the is_new_user flag
/// - `400 Bad Request` - Blank first name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered or refreshed", body = RegisterUserResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let registered = service
        .register(RegisterUserParams {
            telegram_id: payload.telegram_id,
            username: payload.username,
            first_name: payload.first_name,
            last_name: payload.last_name,
            avatar_url: payload.avatar_url,
            birth_date: payload.birth_date,
        })
        .await?;

    Ok(Json(RegisterUserResponseDto {
        user: registered.user.into_dto(),
        is_new_user: registered.is_new_user,
    }))
}

/// Get a user by Telegram id.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that Telegram id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/telegram/{telegram_id}",
    tag = USER_TAG,
    params(
        ("telegram_id" = i64, Path, description = "Telegram id of the user")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_telegram_id(
    State(state): State<AppState>,
    Path(telegram_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_telegram_id(telegram_id)
        .await?;

    Ok(Json(user.into_dto()))
}

/// Update the profile of the user identified by Telegram id.
///
/// Tri-state partial update: omitted fields stay unchanged, explicit nulls
/// clear nullable fields.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Empty update or blank first name
/// - `404 Not Found` - No user with that Telegram id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/users/telegram/{telegram_id}/profile",
    tag = USER_TAG,
    params(
        ("telegram_id" = i64, Path, description = "Telegram id of the user")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(telegram_id): Path<i64>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update_profile(
            telegram_id,
            UpdateProfileParams {
                first_name: payload.first_name,
                username: payload.username,
                last_name: payload.last_name,
                avatar_url: payload.avatar_url,
                profile_text: payload.profile_text,
                birth_date: payload.birth_date,
            },
        )
        .await?;

    Ok(Json(user.into_dto()))
}

/// Get the acting user's friends ordered by upcoming birthday.
///
/// # Returns
/// - `200 OK` - Followed users, soonest birthday first
/// - `404 Not Found` - Acting user not registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/friends",
    tag = USER_TAG,
    params(ActingUserQuery),
    responses(
        (status = 200, description = "Friends ordered by upcoming birthday", body = Vec<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let friends = FriendService::new(&state.db)
        .get_friends(query.telegram_id)
        .await?;

    let friends: Vec<UserDto> = friends.into_iter().map(|user| user.into_dto()).collect();

    Ok(Json(friends))
}

/// Search users by username or name.
///
/// The acting user is excluded from the results.
///
/// # Returns
/// - `200 OK` - Matching users
/// - `400 Bad Request` - Empty query
/// - `404 Not Found` - Acting user not registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = USER_TAG,
    params(SearchUsersQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserDto>),
        (status = 400, description = "Empty query", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchUsersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db)
        .search(query.telegram_id, &query.q)
        .await?;

    let users: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok(Json(users))
}

/// Subscribe the acting user to another user's wishlists.
///
/// Idempotent: subscribing twice reports `created: false`.
///
/// # Returns
/// - `200 OK` - Subscription state after the call
/// - `400 Bad Request` - Attempt to subscribe to yourself
/// - `404 Not Found` - Acting or target user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "Id of the user to follow"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "Subscription created or already present", body = SubscribeResultDto),
        (status = 400, description = "Cannot subscribe to yourself", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let created = FriendService::new(&state.db)
        .subscribe(query.telegram_id, id)
        .await?;

    Ok(Json(SubscribeResultDto { created }))
}

/// Unsubscribe the acting user from another user.
///
/// A missing subscription is a no-op reported as `removed: false`.
///
/// # Returns
/// - `200 OK` - Unsubscription state after the call
/// - `404 Not Found` - Acting user not registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "Id of the user to unfollow"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "Subscription removed or was absent", body = UnsubscribeResultDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let removed = FriendService::new(&state.db)
        .unsubscribe(query.telegram_id, id)
        .await?;

    Ok(Json(UnsubscribeResultDto { removed }))
}

/// Check whether the acting user follows another user.
///
/// # Returns
/// - `200 OK` - Current subscription state
/// - `404 Not Found` - Acting user not registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}/subscribed",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "Id of the potentially followed user"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "Subscription state", body = SubscriptionStateDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn is_subscribed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let subscribed = FriendService::new(&state.db)
        .is_subscribed(query.telegram_id, id)
        .await?;

    Ok(Json(SubscriptionStateDto { subscribed }))
}
