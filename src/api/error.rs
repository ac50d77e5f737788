use std::fmt;

/// A non-2xx response from the domain API.
///
/// Carries the status line eagerly and keeps the response around so the
/// body can still be pulled for diagnostics without paying for it on every
/// error. The response context is logged once, at construction.
#[derive(Debug)]
pub struct HttpError {
    status: u16,
    status_text: String,
    response: Option<reqwest::Response>,
}

impl HttpError {
    pub fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();
        log::error!(
            "HTTP {} {} from {}",
            status.as_u16(),
            status_text,
            response.url()
        );
        Self {
            status: status.as_u16(),
            status_text,
            response: Some(response),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Read the response body. Consumes the buffered response; later calls
    /// return None.
    pub async fn body_text(&mut self) -> Option<String> {
        match self.response.take() {
            Some(response) => response.text().await.ok(),
            None => None,
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {}", self.status, self.status_text)
    }
}

impl std::error::Error for HttpError {}

#[derive(Debug)]
pub enum ApiError {
    /// Non-2xx status from the API.
    Http(HttpError),
    /// The request never produced a response.
    Network(reqwest::Error),
    /// 2xx response whose body did not match the expected shape.
    Parse(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "{e}"),
            ApiError::Network(e) => write!(f, "Network error: {e}"),
            ApiError::Parse(e) => write!(f, "Malformed response body: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Http(e)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e)
    }
}
