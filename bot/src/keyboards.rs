use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, KeyboardRemove,
    WebAppInfo,
};

use crate::config::BotConfig;

/// Label of the button that skips the birth date question.
pub const SKIP_BUTTON: &str = "Пропустить";

/// Reply keyboard with the single skip button for the birth date dialogue.
pub fn skip_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(SKIP_BUTTON)]])
        .resize_keyboard()
        .one_time_keyboard()
}

/// Removes the reply keyboard once the dialogue is over.
pub fn remove_keyboard() -> KeyboardRemove {
    KeyboardRemove::new()
}

/// Inline keyboard opening the Mini App, when its URL is configured.
pub fn miniapp_keyboard(config: &BotConfig) -> Option<InlineKeyboardMarkup> {
    let url = config.miniapp_url.clone()?;

    Some(InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::web_app("Открыть Wishboard", WebAppInfo { url }),
    ]]))
}
