//! Client for the external identity provider. Credential validation is
//! owned entirely by the provider; this module only shapes its answers.

use serde::Deserialize;

use crate::api::{ApiError, HttpError};
use crate::models::user::User;

pub struct IdentityClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl IdentityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Where to send the visitor to log in.
    pub fn authorize_url(&self, redirect_uri: &str) -> String {
        match reqwest::Url::parse_with_params(
            &format!("{}/authorize", self.base_url),
            &[("redirect_uri", redirect_uri)],
        ) {
            Ok(url) => url.into(),
            Err(e) => {
                log::error!("Malformed identity provider base URL: {e}");
                format!("{}/authorize", self.base_url)
            }
        }
    }

    /// Exchange the callback code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(format!("{}/oauth/token", self.base_url))
            .json(&serde_json::json!({ "code": code }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HttpError::from_response(response).into());
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.access_token)
    }

    /// Exchange an access token for the user it belongs to. A rejected or
    /// unknown token is an absent user, not an error.
    pub async fn session(&self, token: &str) -> Result<Option<User>, ApiError> {
        let response = self
            .http
            .get(format!("{}/session", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        if matches!(response.status().as_u16(), 401 | 403 | 404) {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(HttpError::from_response(response).into());
        }

        let body = response.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }
}
