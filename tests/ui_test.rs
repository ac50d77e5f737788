use zjazd::ui::slugify::slugify;
use zjazd::ui::stack::space_between;

// --- Stack spacing ---

#[test]
fn test_space_between_empty() {
    let spaced = space_between(Vec::<&str>::new(), 16);
    assert!(spaced.is_empty());
}

#[test]
fn test_space_between_single_item_gets_no_gap() {
    let spaced = space_between(["only"], 16);
    assert_eq!(spaced.len(), 1);
    assert_eq!(spaced[0].gap_before, 0);
    assert_eq!(spaced[0].item, "only");
}

#[test]
fn test_space_between_inserts_gap_between_consecutive_items() {
    let spaced = space_between(["a", "b", "c"], 32);
    let gaps: Vec<u16> = spaced.iter().map(|s| s.gap_before).collect();
    assert_eq!(gaps, vec![0, 32, 32]);
}

#[test]
fn test_space_between_preserves_order() {
    let spaced = space_between(1..=4, 8);
    let items: Vec<i32> = spaced.into_iter().map(|s| s.item).collect();
    assert_eq!(items, vec![1, 2, 3, 4]);
}

#[test]
fn test_zero_gap_is_allowed() {
    let spaced = space_between(["a", "b"], 0);
    assert_eq!(spaced[1].gap_before, 0);
}

// --- Slugify ---

#[test]
fn test_slugify_lowercases_and_dashes() {
    assert_eq!(slugify("Main Stage"), "main-stage");
}

#[test]
fn test_slugify_transliterates_polish_diacritics() {
    assert_eq!(slugify("Sala Żółta"), "sala-zolta");
    assert_eq!(slugify("Świetlica"), "swietlica");
    assert_eq!(slugify("Łąka"), "laka");
}

#[test]
fn test_slugify_collapses_separator_runs() {
    assert_eq!(slugify("room  --  3"), "room-3");
    assert_eq!(slugify("a / b / c"), "a-b-c");
}

#[test]
fn test_slugify_trims_leading_and_trailing_separators() {
    assert_eq!(slugify("  hala  "), "hala");
    assert_eq!(slugify("---"), "");
}

#[test]
fn test_slugify_keeps_digits() {
    assert_eq!(slugify("Sala 101"), "sala-101");
}
