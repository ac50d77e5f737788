pub mod editor;
pub mod types;

pub use editor::{DraftErrors, EditorMode, MeetingDraft, MeetingEditor, TITLE_MIN_LEN};
pub use types::{ImageKind, Meeting, MeetingImage};
