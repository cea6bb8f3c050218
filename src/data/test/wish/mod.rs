use crate::{
    data::wish::WishRepository,
    model::{
        patch::Patch,
        wish::{CreateWishParams, UpdateWishParams, WishPriority},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod book;
mod create;
mod delete;
mod move_to_wishlist;
mod unbook;
mod update;
