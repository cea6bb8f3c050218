use reqwest::Url;

use crate::error::BotError;

/// Bot configuration loaded from the environment.
///
/// The bot token itself is read by teloxide from TELOXIDE_TOKEN.
pub struct BotConfig {
    /// Base URL of the Wishboard API server.
    pub api_url: String,
    /// URL of the Mini App frontend, shown as a web app button when set.
    pub miniapp_url: Option<Url>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, BotError> {
        let api_url = std::env::var("API_URL")
            .map_err(|_| BotError::MissingEnvVar("API_URL".to_string()))?;

        let miniapp_url = match std::env::var("MINIAPP_URL") {
            Ok(raw) => Some(Url::parse(&raw).map_err(|err| BotError::InvalidEnvVar {
                name: "MINIAPP_URL".to_string(),
                reason: err.to_string(),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            api_url,
            miniapp_url,
        })
    }
}
