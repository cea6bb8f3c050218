use crate::{
    data::wishlist::WishlistRepository,
    model::{
        patch::Patch,
        wishlist::{CreateWishlistParams, UpdateWishlistParams},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_by_user_and_title;
mod find_by_user_id;
mod update;
