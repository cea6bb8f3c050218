//! Axum route configuration and API documentation.

use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{user, wish, wishlist},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wishboard API",
        description = "Backend for the Wishboard Telegram Mini App: users, wishlists, wishes, bookings, and friend subscriptions."
    ),
    paths(
        user::register_user,
        user::get_user_by_telegram_id,
        user::update_profile,
        user::get_friends,
        user::search_users,
        user::subscribe,
        user::unsubscribe,
        user::is_subscribed,
        wishlist::create_wishlist,
        wishlist::get_wishlist,
        wishlist::get_user_wishlists,
        wishlist::update_wishlist,
        wishlist::delete_wishlist,
        wish::create_wish,
        wish::get_wishes,
        wish::get_wish,
        wish::update_wish,
        wish::delete_wish,
        wish::book_wish,
        wish::unbook_wish,
        wish::fulfill_wish,
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users/register", post(user::register_user))
        .route(
            "/api/users/telegram/{telegram_id}",
            get(user::get_user_by_telegram_id),
        )
        .route(
            "/api/users/telegram/{telegram_id}/profile",
            patch(user::update_profile),
        )
        .route("/api/users/friends", get(user::get_friends))
        .route("/api/users/search", get(user::search_users))
        .route(
            "/api/users/{id}/subscribe",
            post(user::subscribe).delete(user::unsubscribe),
        )
        .route("/api/users/{id}/subscribed", get(user::is_subscribed))
        .route("/api/wishlists", post(wishlist::create_wishlist))
        .route(
            "/api/wishlists/user/telegram/{telegram_id}",
            get(wishlist::get_user_wishlists),
        )
        .route(
            "/api/wishlists/{id}",
            get(wishlist::get_wishlist)
                .patch(wishlist::update_wishlist)
                .delete(wishlist::delete_wishlist),
        )
        .route("/api/wishes", post(wish::create_wish).get(wish::get_wishes))
        .route(
            "/api/wishes/{id}",
            get(wish::get_wish)
                .patch(wish::update_wish)
                .delete(wish::delete_wish),
        )
        .route(
            "/api/wishes/{id}/book",
            post(wish::book_wish).delete(wish::unbook_wish),
        )
        .route("/api/wishes/{id}/fulfill", post(wish::fulfill_wish))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
