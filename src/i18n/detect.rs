use std::fmt;

use super::{FALLBACK_LANG, Lang};

/// Pick exactly one supported language from the request signals.
///
/// Precedence: explicit cookie preference, then the Accept-Language header,
/// then the fallback. A cookie value outside the supported set is ignored.
/// Header parse failures are logged and absorbed; resolution always
/// terminates with a member of the supported set.
pub fn resolve_language(accept_language: Option<&str>, cookie: Option<&str>) -> Lang {
    if let Some(value) = cookie
        && let Some(lang) = Lang::from_code(value.trim())
    {
        return lang;
    }

    if let Some(header) = accept_language {
        match negotiate_header(header) {
            Ok(Some(lang)) => return lang,
            Ok(None) => {}
            Err(e) => log::warn!("Language detection failed ({e}), using fallback"),
        }
    }

    FALLBACK_LANG
}

/// Malformed Accept-Language signal. Never escapes this module.
#[derive(Debug)]
struct DetectError(String);

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed Accept-Language: {}", self.0)
    }
}

/// Parse the header and return the supported language with the highest
/// quality value, or None when nothing in the header is supported.
fn negotiate_header(header: &str) -> Result<Option<Lang>, DetectError> {
    let mut best: Option<(Lang, f32)> = None;

    for part in header.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (tag, q) = parse_entry(part)?;
        if tag == "*" {
            continue;
        }
        if let Some(lang) = Lang::from_code(tag)
            && best.is_none_or(|(_, best_q)| q > best_q)
        {
            best = Some((lang, q));
        }
    }

    Ok(best.map(|(lang, _)| lang))
}

/// Split one header entry into (tag, quality). Entries look like
/// "pl", "en-US;q=0.8" or "*;q=0.1".
fn parse_entry(entry: &str) -> Result<(&str, f32), DetectError> {
    let mut pieces = entry.split(';');
    let tag = pieces.next().unwrap_or("").trim();
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || "-_*".contains(c)) {
        return Err(DetectError(entry.to_string()));
    }

    let mut q = 1.0f32;
    for param in pieces {
        let param = param.trim();
        if let Some(raw) = param.strip_prefix("q=") {
            q = raw
                .parse::<f32>()
                .ok()
                .filter(|q| (0.0..=1.0).contains(q))
                .ok_or_else(|| DetectError(entry.to_string()))?;
        } else if !param.is_empty() {
            return Err(DetectError(entry.to_string()));
        }
    }

    Ok((tag, q))
}
