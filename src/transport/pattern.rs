use std::collections::BTreeMap;

use serde::Deserialize;

/// Pattern dialect keys read from per-language pattern maps, in order of preference.
///
/// The service publishes no Rust-specific key today; its Python patterns stick to the
/// character-class subset the `regex` crate understands identically.
pub const PATTERN_LANGUAGES: [&str; 2] = ["rust", "python"];

/// Regex pattern as sent by the service: a single string or a map keyed by language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransportPattern {
    Single(String),
    PerLanguage(BTreeMap<String, String>),
}

impl TransportPattern {
    /// Pick the pattern for this crate, `None` if the map has no usable dialect.
    pub fn into_pattern(self) -> Option<String> {
        let pattern = match self {
            Self::Single(pattern) => pattern,
            Self::PerLanguage(mut patterns) => PATTERN_LANGUAGES
                .iter()
                .find_map(|language| patterns.remove(*language))?,
        };
        Some(translate_end_anchor(&pattern))
    }
}

/// Rewrite Python's end-of-string anchor `\Z` as `\z`, which `regex` rejects otherwise.
fn translate_end_anchor(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('Z') => out.push_str("\\z"),
            Some(escaped) => {
                out.push(c);
                out.push(escaped);
            }
            None => out.push(c),
        }
    }
    out
}
