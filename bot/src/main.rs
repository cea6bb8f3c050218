//! Wishboard Telegram bot entry point.
//!
//! The bot is a thin onboarding layer: it registers users against the
//! Wishboard API on /start, optionally collects a birth date, and hands off to
//! the Mini App for everything else.

mod api;
mod config;
mod error;
mod handlers;
mod keyboards;

use std::sync::Arc;

use teloxide::{dispatching::dialogue::InMemStorage, prelude::*};
use tracing_subscriber::EnvFilter;

use crate::{api::ApiClient, config::BotConfig, error::BotError, handlers::RegistrationState};

#[tokio::main]
async fn main() -> Result<(), BotError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Arc::new(BotConfig::from_env()?);
    let api = Arc::new(ApiClient::new(config.api_url.clone()));

    // Reads the token from TELOXIDE_TOKEN
    let bot = Bot::from_env();

    tracing::info!("Starting Wishboard bot");

    Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![
            api,
            config,
            InMemStorage::<RegistrationState>::new()
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
