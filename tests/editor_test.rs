use chrono::{TimeZone, Utc};

use zjazd::models::meeting::{EditorMode, Meeting, MeetingEditor, TITLE_MIN_LEN};
use zjazd::models::user::User;

fn sample_meeting() -> Meeting {
    Meeting {
        id: 7,
        title: "Otwarte spotkanie".to_string(),
        description: Some("Planujemy program festiwalu.".to_string()),
        start_time: Some(Utc.with_ymd_and_hms(2026, 9, 12, 18, 0, 0).unwrap()),
        published_at: None,
        created_at: Some(Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap()),
        image: None,
        author: User {
            id: 3,
            name: "Ola Nowak".to_string(),
            slug: "ola-nowak".to_string(),
            avatar: None,
        },
    }
}

#[test]
fn test_editor_starts_in_viewing() {
    let editor = MeetingEditor::new(sample_meeting());
    assert_eq!(editor.mode(), EditorMode::Viewing);
    assert!(!editor.is_editing());
    assert!(editor.errors().is_empty());
}

#[test]
fn test_start_edit_seeds_draft_from_meeting() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();

    assert_eq!(editor.mode(), EditorMode::Editing);
    assert_eq!(editor.draft().title, "Otwarte spotkanie");
    assert_eq!(editor.draft().description, "Planujemy program festiwalu.");
    assert_eq!(editor.draft().start_time, "2026-09-12T18:00");
}

#[test]
fn test_keystrokes_only_touch_the_draft() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();
    editor.set_title("Zamknięte spotkanie");

    assert_eq!(editor.draft().title, "Zamknięte spotkanie");
    assert_eq!(editor.meeting().title, "Otwarte spotkanie");
}

#[test]
fn test_setters_are_inert_while_viewing() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.set_title("Should not stick");

    assert_eq!(editor.draft().title, "Otwarte spotkanie");
    assert_eq!(editor.meeting().title, "Otwarte spotkanie");
}

#[test]
fn test_confirm_commits_a_valid_draft_and_returns_to_viewing() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();
    editor.set_title("Warsztaty kompostowania");
    editor.set_description("Nowy opis.");

    assert!(editor.confirm());
    assert_eq!(editor.mode(), EditorMode::Viewing);
    assert_eq!(editor.meeting().title, "Warsztaty kompostowania");
    assert_eq!(editor.meeting().description.as_deref(), Some("Nowy opis."));
    assert!(editor.errors().is_empty());
}

#[test]
fn test_short_title_keeps_editing_with_a_field_error() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();
    editor.set_title("abc");

    assert!(!editor.confirm());
    assert_eq!(editor.mode(), EditorMode::Editing);
    assert!(editor.title_error().is_some());
    // The committed copy is untouched.
    assert_eq!(editor.meeting().title, "Otwarte spotkanie");
}

#[test]
fn test_title_length_boundary() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();

    editor.set_title(&"x".repeat(TITLE_MIN_LEN - 1));
    assert!(!editor.confirm());

    editor.set_title(&"x".repeat(TITLE_MIN_LEN));
    assert!(editor.confirm());
    assert_eq!(editor.meeting().title, "x".repeat(TITLE_MIN_LEN));
}

#[test]
fn test_title_is_trimmed_before_validation_and_commit() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();

    // Whitespace does not count toward the minimum length.
    editor.set_title("  ab  ");
    assert!(!editor.confirm());
    assert!(editor.title_error().is_some());

    editor.set_title("  Dobry tytuł  ");
    assert!(editor.confirm());
    assert_eq!(editor.meeting().title, "Dobry tytuł");
}

#[test]
fn test_empty_description_commits_as_absent() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();
    editor.set_description("   ");

    assert!(editor.confirm());
    assert_eq!(editor.meeting().description, None);
}

#[test]
fn test_start_time_is_parsed_from_the_input_format() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();
    editor.set_start_time("2026-10-01T12:30");

    assert!(editor.confirm());
    assert_eq!(
        editor.meeting().start_time,
        Some(Utc.with_ymd_and_hms(2026, 10, 1, 12, 30, 0).unwrap())
    );
}

#[test]
fn test_empty_start_time_clears_the_field() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();
    editor.set_start_time("");

    assert!(editor.confirm());
    assert_eq!(editor.meeting().start_time, None);
}

#[test]
fn test_unparseable_start_time_is_a_field_error() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();
    editor.set_start_time("next tuesday");

    assert!(!editor.confirm());
    assert_eq!(editor.mode(), EditorMode::Editing);
    assert!(editor.start_time_error().is_some());
    assert!(editor.title_error().is_none());
}

#[test]
fn test_restarting_an_edit_discards_the_failed_draft() {
    let mut editor = MeetingEditor::new(sample_meeting());
    editor.start_edit();
    editor.set_title("ab");
    assert!(!editor.confirm());

    editor.start_edit();
    assert_eq!(editor.draft().title, "Otwarte spotkanie");
    assert!(editor.errors().is_empty());
}

#[test]
fn test_confirm_while_viewing_is_a_no_op() {
    let mut editor = MeetingEditor::new(sample_meeting());
    assert!(!editor.confirm());
    assert_eq!(editor.mode(), EditorMode::Viewing);
}
