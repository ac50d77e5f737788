use std::fmt;

mod detect;
mod store;

pub use detect::resolve_language;
pub use store::LocaleStore;

/// Languages the application renders natively without an additional fetch.
pub const SUPPORTED_LANGUAGES: [Lang; 2] = [Lang::Pl, Lang::En];
pub const FALLBACK_LANG: Lang = Lang::En;

/// Plain cookie holding the visitor's explicit language preference.
pub const LANG_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Pl,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Pl => "pl",
            Lang::En => "en",
        }
    }

    /// Match a language tag against the supported set. Region subtags are
    /// ignored ("en-US" matches "en"); anything else yields None.
    pub fn from_code(tag: &str) -> Option<Lang> {
        let primary = tag.split(['-', '_']).next().unwrap_or("");
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
