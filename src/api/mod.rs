//! Client for the domain API that owns meetings, users, the festival
//! agenda, and locale resources. One attempt per call; no retries.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::models::agenda::AgendaRoom;
use crate::models::meeting::Meeting;
use crate::models::user::User;

mod error;

pub use error::{ApiError, HttpError};

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
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

    /// GET a path and parse the 2xx JSON body into `T`. Non-2xx responses
    /// become [`HttpError`]; parse and transport failures keep their own
    /// variants.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HttpError::from_response(response).into());
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`fetch`](Self::fetch), with HTTP 404 mapped to `None` so pages
    /// can fail soft on absent entities.
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        match self.fetch(path).await {
            Ok(value) => Ok(Some(value)),
            Err(ApiError::Http(e)) if e.status() == 404 => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn meeting(&self, id: i64) -> Result<Option<Meeting>, ApiError> {
        self.fetch_optional(&format!("/meetings/{id}")).await
    }

    pub async fn meetings(&self) -> Result<Vec<Meeting>, ApiError> {
        self.fetch("/meetings").await
    }

    pub async fn agenda(&self) -> Result<Vec<AgendaRoom>, ApiError> {
        self.fetch("/agenda").await
    }

    pub async fn user_by_slug(&self, slug: &str) -> Result<Option<User>, ApiError> {
        self.fetch_optional(&format!("/users/{slug}")).await
    }

    /// Locale resources for codes missing from the bundled set.
    pub async fn locale_bundle(
        &self,
        code: &str,
    ) -> Result<HashMap<String, String>, ApiError> {
        self.fetch(&format!("/locales/{code}.json")).await
    }
}
