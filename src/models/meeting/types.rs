use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// A meeting as served by the domain API. The page only ever holds a
/// transient read copy; the API owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<MeetingImage>,
    pub author: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingImage {
    pub url: String,
    #[serde(default)]
    pub kind: ImageKind,
}

/// Whether the featured picture renders inline above the card or as a
/// full-bleed background behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    #[default]
    Inline,
    Background,
}

/// Display format for meeting timestamps.
const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M";

/// Format used by the datetime-local form input.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

impl Meeting {
    pub fn has_background_image(&self) -> bool {
        self.image
            .as_ref()
            .is_some_and(|img| img.kind == ImageKind::Background)
    }

    pub fn start_time_display(&self) -> Option<String> {
        self.start_time.map(|t| t.format(DISPLAY_FORMAT).to_string())
    }

    /// Start time in the shape the datetime-local input expects.
    pub fn start_time_input(&self) -> String {
        self.start_time
            .map(|t| t.format(INPUT_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn published_at_display(&self) -> Option<String> {
        self.published_at.map(|t| t.format(DISPLAY_FORMAT).to_string())
    }

    pub fn created_at_display(&self) -> Option<String> {
        self.created_at.map(|t| t.format(DISPLAY_FORMAT).to_string())
    }

    pub fn href(&self) -> String {
        format!("/meetings/{}", self.id)
    }
}
