//! HTTP client for the Wishboard API server.
//!
//! The bot never touches the database; everything goes through the same HTTP
//! API the Mini App uses.

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

/// Registration payload sent on every /start.
#[derive(Serialize)]
pub struct RegisterUserRequest {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// The subset of the user payload the bot cares about.
#[derive(Deserialize)]
pub struct UserPayload {
    pub telegram_id: i64,
    pub first_name: String,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct RegisterUserResponse {
    pub user: UserPayload,
    pub is_new_user: bool,
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Registers the user, or refreshes their profile if already registered.
    pub async fn register_user(
        &self,
        request: &RegisterUserRequest,
    ) -> Result<RegisterUserResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/users/register", self.base_url))
            .json(request)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Stores the user's birth date via the profile update endpoint.
    pub async fn set_birth_date(
        &self,
        telegram_id: i64,
        birth_date: NaiveDate,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .patch(format!(
                "{}/api/users/telegram/{}/profile",
                self.base_url, telegram_id
            ))
            .json(&serde_json::json!({ "birth_date": birth_date }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        Ok(())
    }

    async fn parse<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        Ok(response.json::<T>().await?)
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = match response.json::<ErrorPayload>().await {
            Ok(payload) => payload.error,
            Err(_) => "Unknown error".to_string(),
        };

        ApiError::Status { status, message }
    }
}
