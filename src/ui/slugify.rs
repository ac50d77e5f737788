/// Turn a display name into a URL/fragment-safe slug: lowercase ASCII,
/// Polish diacritics transliterated, every other character run collapsed
/// into a single dash. Leading and trailing dashes are not emitted.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        match fold_char(c) {
            Some(folded) => {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(folded);
            }
            None => pending_dash = true,
        }
    }

    slug
}

/// Map one character to its slug spelling, or None for separators.
/// Covers the diacritics of the bundled languages.
fn fold_char(c: char) -> Option<char> {
    match c {
        'ą' | 'Ą' => Some('a'),
        'ć' | 'Ć' => Some('c'),
        'ę' | 'Ę' => Some('e'),
        'ł' | 'Ł' => Some('l'),
        'ń' | 'Ń' => Some('n'),
        'ó' | 'Ó' => Some('o'),
        'ś' | 'Ś' => Some('s'),
        'ź' | 'Ź' | 'ż' | 'Ż' => Some('z'),
        c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
