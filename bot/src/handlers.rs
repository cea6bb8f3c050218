//! Dispatcher schema and message handlers.
//!
//! The only dialogue the bot runs is onboarding: /start registers the user
//! against the API and, for first-time users, asks for a birth date in
//! DD.MM.YYYY format (with a skip button). Everything else happens in the
//! Mini App.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use teloxide::{
    dispatching::{dialogue::InMemStorage, UpdateHandler},
    prelude::*,
    types::UserId,
    utils::command::BotCommands,
};

use crate::{
    api::{ApiClient, RegisterUserRequest},
    config::BotConfig,
    keyboards::{self, SKIP_BUTTON},
};

pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;
pub type HandlerResult = Result<(), HandlerError>;
pub type RegistrationDialogue = Dialogue<RegistrationState, InMemStorage<RegistrationState>>;

/// Onboarding dialogue state.
#[derive(Clone, Default)]
pub enum RegistrationState {
    #[default]
    Idle,
    /// Waiting for a DD.MM.YYYY birth date or the skip button.
    AwaitingBirthDate,
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "показать справку")]
    Help,
}

/// Builds the handler tree for the dispatcher.
pub fn schema() -> UpdateHandler<HandlerError> {
    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(dptree::case![Command::Start].endpoint(handle_start))
        .branch(dptree::case![Command::Help].endpoint(handle_help));

    Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<RegistrationState>, RegistrationState>()
        .branch(command_handler)
        .branch(dptree::case![RegistrationState::AwaitingBirthDate].endpoint(handle_birth_date))
}

/// Registers the user and starts the birth date dialogue for newcomers.
async fn handle_start(
    bot: Bot,
    dialogue: RegistrationDialogue,
    msg: Message,
    api: Arc<ApiClient>,
    config: Arc<BotConfig>,
) -> HandlerResult {
    let Some(from) = msg.from.clone() else {
        return Ok(());
    };

    let avatar_url = resolve_avatar_url(&bot, from.id).await;

    let registered = match api
        .register_user(&RegisterUserRequest {
            telegram_id: from.id.0 as i64,
            username: from.username.clone(),
            first_name: from.first_name.clone(),
            last_name: from.last_name.clone(),
            avatar_url,
            birth_date: None,
        })
        .await
    {
        Ok(registered) => registered,
        Err(err) => {
            tracing::error!("Registration failed for {}: {err}", from.id);
            bot.send_message(
                msg.chat.id,
                "Сервис временно недоступен, попробуйте позже.",
            )
            .await?;
            return Ok(());
        }
    };

    if registered.is_new_user && registered.user.birth_date.is_none() {
        bot.send_message(
            msg.chat.id,
            format!(
                "Привет, {}! Я помогу вести списки желаний.\n\n\
                 Укажи дату рождения в формате ДД.ММ.ГГГГ, чтобы друзья знали, \
                 когда тебя поздравлять. Или нажми «Пропустить».",
                registered.user.first_name
            ),
        )
        .reply_markup(keyboards::skip_keyboard())
        .await?;
        dialogue.update(RegistrationState::AwaitingBirthDate).await?;
    } else {
        send_welcome(&bot, &msg, &config).await?;
    }

    Ok(())
}

async fn handle_help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;

    Ok(())
}

/// Handles the birth date answer (a date, the skip button, or noise).
async fn handle_birth_date(
    bot: Bot,
    dialogue: RegistrationDialogue,
    msg: Message,
    api: Arc<ApiClient>,
    config: Arc<BotConfig>,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        bot.send_message(
            msg.chat.id,
            "Пришли дату рождения текстом в формате ДД.ММ.ГГГГ или нажми «Пропустить».",
        )
        .await?;
        return Ok(());
    };

    if text.trim() == SKIP_BUTTON {
        dialogue.exit().await?;
        send_welcome(&bot, &msg, &config).await?;
        return Ok(());
    }

    let Some(birth_date) = parse_birth_date(text) else {
        bot.send_message(
            msg.chat.id,
            "Не получилось разобрать дату. Нужен формат ДД.ММ.ГГГГ, например 15.03.1995.",
        )
        .await?;
        return Ok(());
    };

    let telegram_id = msg.from.as_ref().map(|user| user.id.0 as i64).unwrap_or(0);
    if let Err(err) = api.set_birth_date(telegram_id, birth_date).await {
        tracing::error!("Failed to store birth date for {telegram_id}: {err}");
        bot.send_message(
            msg.chat.id,
            "Не удалось сохранить дату, попробуй ещё раз позже.",
        )
        .await?;
        return Ok(());
    }

    dialogue.exit().await?;
    bot.send_message(msg.chat.id, "Дата рождения сохранена!")
        .reply_markup(keyboards::remove_keyboard())
        .await?;
    send_welcome(&bot, &msg, &config).await?;

    Ok(())
}

async fn send_welcome(bot: &Bot, msg: &Message, config: &BotConfig) -> HandlerResult {
    let text = "Всё готово! Открывай Wishboard, создавай списки желаний и делись ими с друзьями.";

    let request = bot.send_message(msg.chat.id, text);
    match keyboards::miniapp_keyboard(config) {
        Some(keyboard) => request.reply_markup(keyboard).await?,
        None => request.await?,
    };

    Ok(())
}

/// Resolves the user's largest profile photo to a downloadable URL.
async fn resolve_avatar_url(bot: &Bot, user_id: UserId) -> Option<String> {
    let photos = bot.get_user_profile_photos(user_id).limit(1).await.ok()?;
    let photo = photos.photos.first()?.last()?;
    let file = bot.get_file(photo.file.id.clone()).await.ok()?;

    Some(format!(
        "https://api.telegram.org/file/bot{}/{}",
        bot.token(),
        file.path
    ))
}

/// Parses a DD.MM.YYYY birth date.
///
/// Dates in the future and dates before 1900 are rejected.
fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(text.trim(), "%d.%m.%Y").ok()?;

    if date.year() < 1900 || date > Utc::now().date_naive() {
        return None;
    }

    Some(date)
}
