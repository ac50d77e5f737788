use serde::{Deserialize, Serialize};

/// A user record as served by the domain API. Also the shape carried by a
/// resolved session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// URL-safe handle used for profile routes.
    pub slug: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|url| !url.is_empty())
    }

    /// Single-letter placeholder shown when no avatar is set.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }

    pub fn profile_href(&self) -> String {
        format!("/u/{}", self.slug)
    }
}
