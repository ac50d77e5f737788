use serde::{Deserialize, Serialize};

use crate::ui::slugify::slugify;

/// One room (or stage) of the festival agenda, as served by the domain API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaRoom {
    pub name: String,
    #[serde(default)]
    pub items: Vec<AgendaItem>,
}

impl AgendaRoom {
    /// Fragment identifier for in-page room links.
    pub fn anchor(&self) -> String {
        slugify(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Already formatted by the API.
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub organizer: Option<Organizer>,
    #[serde(default)]
    pub description: Option<String>,
    /// Present when the item is backed by a meeting record.
    #[serde(default)]
    pub meeting_id: Option<i64>,
}

impl AgendaItem {
    pub fn href(&self) -> Option<String> {
        self.meeting_id.map(|id| format!("/meetings/{id}"))
    }

    pub fn description_trimmed(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    #[serde(default)]
    pub organization: Option<String>,
}
