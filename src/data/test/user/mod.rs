use crate::{
    data::user::UserRepository,
    model::{
        patch::Patch,
        user::{RegisterUserParams, SearchUsersParams, UpdateProfileParams},
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod find_by_telegram_id;
mod search;
mod update_profile;
mod upsert;
