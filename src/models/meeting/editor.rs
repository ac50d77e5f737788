//! View/edit state for the meeting detail page.
//!
//! The editor holds the page's local copy of one meeting plus an
//! uncommitted draft bound to the edit form. Keystrokes mutate only the
//! draft; confirming validates it and commits it to the local copy.
//! Nothing here talks to the API: the record it mirrors is owned
//! elsewhere, and the committed state lives only as long as the page.

use chrono::NaiveDateTime;

use super::types::{INPUT_FORMAT, Meeting};

/// Minimum length of a meeting title, in characters, after trimming.
pub const TITLE_MIN_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    Editing,
}

/// Raw form values under edit. Kept as submitted strings so the form can
/// re-render exactly what the visitor typed when validation fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingDraft {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DDTHH:MM` from the datetime-local input, or empty.
    pub start_time: String,
}

impl MeetingDraft {
    fn seeded_from(meeting: &Meeting) -> Self {
        Self {
            title: meeting.title.clone(),
            description: meeting.description.clone().unwrap_or_default(),
            start_time: meeting.start_time_input(),
        }
    }
}

/// Field-level validation failures as locale keys, rendered inline next to
/// the offending field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftErrors {
    pub title: Option<&'static str>,
    pub start_time: Option<&'static str>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.start_time.is_none()
    }
}

pub struct MeetingEditor {
    meeting: Meeting,
    draft: MeetingDraft,
    mode: EditorMode,
    errors: DraftErrors,
}

impl MeetingEditor {
    pub fn new(meeting: Meeting) -> Self {
        let draft = MeetingDraft::seeded_from(&meeting);
        Self {
            meeting,
            draft,
            mode: EditorMode::Viewing,
            errors: DraftErrors::default(),
        }
    }

    pub fn editing(meeting: Meeting) -> Self {
        let mut editor = Self::new(meeting);
        editor.start_edit();
        editor
    }

    pub fn meeting(&self) -> &Meeting {
        &self.meeting
    }

    pub fn draft(&self) -> &MeetingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &DraftErrors {
        &self.errors
    }

    pub fn title_error(&self) -> Option<&'static str> {
        self.errors.title
    }

    pub fn start_time_error(&self) -> Option<&'static str> {
        self.errors.start_time
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    /// Enter `Editing` with a fresh draft seeded from the committed copy.
    pub fn start_edit(&mut self) {
        self.draft = MeetingDraft::seeded_from(&self.meeting);
        self.errors = DraftErrors::default();
        self.mode = EditorMode::Editing;
    }

    pub fn set_title(&mut self, value: &str) {
        if self.is_editing() {
            self.draft.title = value.to_string();
        }
    }

    pub fn set_description(&mut self, value: &str) {
        if self.is_editing() {
            self.draft.description = value.to_string();
        }
    }

    pub fn set_start_time(&mut self, value: &str) {
        if self.is_editing() {
            self.draft.start_time = value.to_string();
        }
    }

    /// Validate the draft and, on success, commit it to the local copy and
    /// return to `Viewing`. On failure the editor stays in `Editing` with
    /// field errors set. Returns whether the draft was committed.
    pub fn confirm(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }

        let title = self.draft.title.trim();
        let start_time = self.draft.start_time.trim();

        let mut errors = DraftErrors::default();
        if title.chars().count() < TITLE_MIN_LEN {
            errors.title = Some("error-title-too-short");
        }
        let parsed_start = if start_time.is_empty() {
            None
        } else {
            match NaiveDateTime::parse_from_str(start_time, INPUT_FORMAT) {
                Ok(naive) => Some(naive.and_utc()),
                Err(_) => {
                    errors.start_time = Some("error-start-time-invalid");
                    None
                }
            }
        };

        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        self.meeting.title = title.to_string();
        let description = self.draft.description.trim();
        self.meeting.description =
            (!description.is_empty()).then(|| description.to_string());
        self.meeting.start_time = parsed_start;

        self.errors = DraftErrors::default();
        self.mode = EditorMode::Viewing;
        true
    }
}
