use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    dto::{
        api::{ActingUserQuery, ErrorDto},
        wishlist::{CreateWishlistDto, UpdateWishlistDto, WishlistDto, WishlistListDto},
    },
    error::AppError,
    model::wishlist::{NewWishlist, UpdateWishlistParams},
    service::wishlist::WishlistService,
    state::AppState,
};

/// Tag for grouping wishlist endpoints in OpenAPI documentation
pub static WISHLIST_TAG: &str = "wishlist";

/// Create a wishlist owned by the acting user.
///
/// # Returns
/// - `201 Created` - The created wishlist
/// - `400 Bad Request` - Blank title
/// - `404 Not Found` - Acting user not registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/wishlists",
    tag = WISHLIST_TAG,
    params(ActingUserQuery),
    request_body = CreateWishlistDto,
    responses(
        (status = 201, description = "Wishlist created", body = WishlistDto),
        (status = 400, description = "Invalid wishlist data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_wishlist(
    State(state): State<AppState>,
    Query(query): Query<ActingUserQuery>,
    Json(payload): Json<CreateWishlistDto>,
) -> Result<impl IntoResponse, AppError> {
    let wishlist = WishlistService::new(&state.db)
        .create(
            query.telegram_id,
            NewWishlist {
                title: payload.title,
                description: payload.description,
                is_public: payload.is_public,
                emoji: payload.emoji,
                event_date: payload.event_date,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(wishlist.into_dto())))
}

/// Get a wishlist by id.
///
/// Private wishlists are only visible to their owner.
///
/// # Returns
/// - `200 OK` - The wishlist
/// - `403 Forbidden` - Wishlist is private and the caller is not the owner
/// - `404 Not Found` - No wishlist with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/wishlists/{id}",
    tag = WISHLIST_TAG,
    params(
        ("id" = Uuid, Path, description = "Wishlist id"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "Wishlist found", body = WishlistDto),
        (status = 403, description = "Wishlist is private", body = ErrorDto),
        (status = 404, description = "Wishlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let wishlist = WishlistService::new(&state.db)
        .get_by_id(query.telegram_id, id)
        .await?;

    Ok(Json(wishlist.into_dto()))
}

/// Get all wishlists of the user identified by Telegram id.
///
/// When the viewer is not the owner, private wishlists are filtered out.
///
/// # Returns
/// - `200 OK` - The user's wishlists
/// - `404 Not Found` - No user with that Telegram id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/wishlists/user/telegram/{telegram_id}",
    tag = WISHLIST_TAG,
    params(
        ("telegram_id" = i64, Path, description = "Telegram id of the wishlist owner"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "The user's wishlists", body = WishlistListDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_wishlists(
    State(state): State<AppState>,
    Path(telegram_id): Path<i64>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let wishlists = WishlistService::new(&state.db)
        .get_for_user(telegram_id, query.telegram_id)
        .await?;

    let wishlists: Vec<WishlistDto> = wishlists
        .into_iter()
        .map(|wishlist| wishlist.into_dto())
        .collect();
    let total = wishlists.len();

    Ok(Json(WishlistListDto { wishlists, total }))
}

/// Update a wishlist owned by the acting user.
///
/// Tri-state partial update: omitted fields stay unchanged, explicit nulls
/// clear nullable fields.
///
/// # Returns
/// - `200 OK` - Updated wishlist
/// - `400 Bad Request` - Blank title
/// - `403 Forbidden` - Caller is not the owner
/// - `404 Not Found` - No wishlist with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/wishlists/{id}",
    tag = WISHLIST_TAG,
    params(
        ("id" = Uuid, Path, description = "Wishlist id"),
        ActingUserQuery
    ),
    request_body = UpdateWishlistDto,
    responses(
        (status = 200, description = "Wishlist updated", body = WishlistDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Wishlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_wishlist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
    Json(payload): Json<UpdateWishlistDto>,
) -> Result<impl IntoResponse, AppError> {
    let wishlist = WishlistService::new(&state.db)
        .update(
            query.telegram_id,
            id,
            UpdateWishlistParams {
                title: payload.title,
                description: payload.description,
                is_public: payload.is_public,
                emoji: payload.emoji,
                event_date: payload.event_date,
            },
        )
        .await?;

    Ok(Json(wishlist.into_dto()))
}

/// Delete a wishlist owned by the acting user.
///
/// The registration-time default wishlist cannot be deleted. Wishes inside the
/// wishlist are deleted with it.
///
/// # Returns
/// - `204 No Content` - Wishlist deleted
/// - `403 Forbidden` - Caller is not the owner, or the wishlist is the default
/// - `404 Not Found` - No wishlist with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/wishlists/{id}",
    tag = WISHLIST_TAG,
    params(
        ("id" = Uuid, Path, description = "Wishlist id"),
        ActingUserQuery
    ),
    responses(
        (status = 204, description = "Wishlist deleted"),
        (status = 403, description = "Not the owner or default wishlist", body = ErrorDto),
        (status = 404, description = "Wishlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_wishlist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    WishlistService::new(&state.db)
        .delete(query.telegram_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
