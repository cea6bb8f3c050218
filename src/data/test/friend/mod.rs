use crate::data::friend::FriendRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_followed;
mod is_subscribed;
mod subscribe;
mod unsubscribe;
