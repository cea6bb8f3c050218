use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    dto::{
        api::{ActingUserQuery, ErrorDto, ListWishesQuery},
        wish::{CreateWishDto, UpdateWishDto, WishDto},
    },
    error::AppError,
    model::wish::{CreateWishParams, UpdateWishParams, WishPriority},
    service::wish::WishService,
    state::AppState,
};

/// Tag for grouping wish endpoints in OpenAPI documentation
pub static WISH_TAG: &str = "wish";

/// Create a wish in a wishlist owned by the acting user.
///
/// # Returns
/// - `201 Created` - The created wish
/// - `400 Bad Request` - Blank title
/// - `403 Forbidden` - Wishlist belongs to another user
/// - `404 Not Found` - Acting user or wishlist not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/wishes",
    tag = WISH_TAG,
    params(ActingUserQuery),
    request_body = CreateWishDto,
    responses(
        (status = 201, description = "Wish created", body = WishDto),
        (status = 400, description = "Invalid wish data", body = ErrorDto),
        (status = 403, description = "Not the wishlist owner", body = ErrorDto),
        (status = 404, description = "User or wishlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_wish(
    State(state): State<AppState>,
    Query(query): Query<ActingUserQuery>,
    Json(payload): Json<CreateWishDto>,
) -> Result<impl IntoResponse, AppError> {
    let wish = WishService::new(&state.db)
        .create(
            query.telegram_id,
            CreateWishParams {
                wishlist_id: payload.wishlist_id,
                title: payload.title,
                subtitle: payload.subtitle,
                description: payload.description,
                link: payload.link,
                image_url: payload.image_url,
                price: payload.price,
                currency: payload.currency,
                priority: WishPriority::from_dto(payload.priority),
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(wish.into_dto())))
}

/// Get all wishes of a wishlist.
///
/// Wishes of private wishlists are only visible to the owner.
///
/// # Returns
/// - `200 OK` - Wishes in the wishlist
/// - `403 Forbidden` - Wishlist is private
/// - `404 Not Found` - Wishlist not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/wishes",
    tag = WISH_TAG,
    params(ListWishesQuery),
    responses(
        (status = 200, description = "Wishes in the wishlist", body = Vec<WishDto>),
        (status = 403, description = "Wishlist is private", body = ErrorDto),
        (status = 404, description = "Wishlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wishes(
    State(state): State<AppState>,
    Query(query): Query<ListWishesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let wishes = WishService::new(&state.db)
        .get_by_wishlist(query.telegram_id, query.wishlist_id)
        .await?;

    let wishes: Vec<WishDto> = wishes.into_iter().map(|wish| wish.into_dto()).collect();

    Ok(Json(wishes))
}

/// Get a wish by id.
///
/// # Returns
/// - `200 OK` - The wish
/// - `403 Forbidden` - Parent wishlist is private
/// - `404 Not Found` - No wish with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/wishes/{id}",
    tag = WISH_TAG,
    params(
        ("id" = Uuid, Path, description = "Wish id"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "Wish found", body = WishDto),
        (status = 403, description = "Parent wishlist is private", body = ErrorDto),
        (status = 404, description = "Wish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let wish = WishService::new(&state.db)
        .get_by_id(query.telegram_id, id)
        .await?;

    Ok(Json(wish.into_dto()))
}

/// Update a wish owned by the acting user.
///
/// Tri-state partial update; booking state is only changed through the book
/// and unbook endpoints.
///
/// # Returns
/// - `200 OK` - Updated wish
/// - `400 Bad Request` - Blank title
/// - `403 Forbidden` - Caller is not the owner
/// - `404 Not Found` - Wish or target wishlist not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/wishes/{id}",
    tag = WISH_TAG,
    params(
        ("id" = Uuid, Path, description = "Wish id"),
        ActingUserQuery
    ),
    request_body = UpdateWishDto,
    responses(
        (status = 200, description = "Wish updated", body = WishDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Wish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_wish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
    Json(payload): Json<UpdateWishDto>,
) -> Result<impl IntoResponse, AppError> {
    let wish = WishService::new(&state.db)
        .update(
            query.telegram_id,
            id,
            UpdateWishParams {
                wishlist_id: payload.wishlist_id,
                title: payload.title,
                subtitle: payload.subtitle,
                description: payload.description,
                link: payload.link,
                image_url: payload.image_url,
                price: payload.price,
                currency: payload.currency,
                priority: payload.priority.map(WishPriority::from_dto),
            },
        )
        .await?;

    Ok(Json(wish.into_dto()))
}

/// Delete a wish owned by the acting user.
///
/// # Returns
/// - `204 No Content` - Wish deleted
/// - `403 Forbidden` - Caller is not the owner
/// - `404 Not Found` - No wish with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/wishes/{id}",
    tag = WISH_TAG,
    params(
        ("id" = Uuid, Path, description = "Wish id"),
        ActingUserQuery
    ),
    responses(
        (status = 204, description = "Wish deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Wish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_wish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    WishService::new(&state.db)
        .delete(query.telegram_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Book a wish for the acting user.
///
/// Owners cannot book their own wishes. When two users race for the same wish,
/// the loser gets a conflict.
///
/// # Returns
/// - `200 OK` - Wish booked by the acting user
/// - `403 Forbidden` - Caller owns the wish
/// - `404 Not Found` - Wish not found
/// - `409 Conflict` - Wish is already booked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/wishes/{id}/book",
    tag = WISH_TAG,
    params(
        ("id" = Uuid, Path, description = "Wish id"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "Wish booked", body = WishDto),
        (status = 403, description = "Cannot book your own wish", body = ErrorDto),
        (status = 404, description = "Wish not found", body = ErrorDto),
        (status = 409, description = "Wish is already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_wish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let wish = WishService::new(&state.db)
        .book(query.telegram_id, id)
        .await?;

    Ok(Json(wish.into_dto()))
}

/// Release the acting user's booking on a wish.
///
/// # Returns
/// - `200 OK` - Booking released
/// - `400 Bad Request` - Wish is not booked
/// - `403 Forbidden` - Caller is not the booker
/// - `404 Not Found` - Wish not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/wishes/{id}/book",
    tag = WISH_TAG,
    params(
        ("id" = Uuid, Path, description = "Wish id"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "Booking released", body = WishDto),
        (status = 400, description = "Wish is not booked", body = ErrorDto),
        (status = 403, description = "Not the booker", body = ErrorDto),
        (status = 404, description = "Wish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unbook_wish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let wish = WishService::new(&state.db)
        .unbook(query.telegram_id, id)
        .await?;

    Ok(Json(wish.into_dto()))
}

/// Move a wish into the owner's fulfilled-wishes list.
///
/// Creates the fulfilled list on first use and clears any booking on the wish.
///
/// # Returns
/// - `200 OK` - Wish fulfilled
/// - `400 Bad Request` - Wish is already fulfilled
/// - `403 Forbidden` - Caller is not the owner
/// - `404 Not Found` - Wish not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/wishes/{id}/fulfill",
    tag = WISH_TAG,
    params(
        ("id" = Uuid, Path, description = "Wish id"),
        ActingUserQuery
    ),
    responses(
        (status = 200, description = "Wish fulfilled", body = WishDto),
        (status = 400, description = "Wish is already fulfilled", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Wish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fulfill_wish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let wish = WishService::new(&state.db)
        .fulfill(query.telegram_id, id)
        .await?;

    Ok(Json(wish.into_dto()))
}
