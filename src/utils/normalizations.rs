use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::DecodingError;

static ASCII_NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9A-Za-z_]+").expect("ascii non-word pattern is valid")
});

static UNICODE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\W+").expect("unicode non-word pattern is valid")
});

/// Which characters count as "word characters" when collapsing separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    /// `[A-Za-z0-9_]` only. Output is always within `[a-z0-9_]`.
    #[default]
    Ascii,
    /// Unicode `\w`: letters, marks, digits and connector punctuation.
    Unicode,
}

impl WordClass {
    fn non_word(&self) -> &'static Regex {
        match self {
            WordClass::Ascii => &*ASCII_NON_WORD,
            WordClass::Unicode => &*UNICODE_NON_WORD,
        }
    }
}

/// Normalizes `input` into a filename stem using the ASCII word class.
pub fn normalize(input: &str) -> String {
    normalize_with(input, WordClass::default())
}

/// Collapses runs of non-word characters into `_`, strips edge underscores
/// and lowercases what is left.
pub fn normalize_with(input: &str, class: WordClass) -> String {
    let collapsed = class.non_word().replace_all(input, "_");
    let trimmed = collapsed.trim_matches('_');

    match class {
        WordClass::Ascii => trimmed.to_ascii_lowercase(),
        WordClass::Unicode => trimmed.to_lowercase(),
    }
}

pub fn normalize_bytes(input: &[u8], class: WordClass) -> Result<String, DecodingError> {
    let text = std::str::from_utf8(input)?;
    Ok(normalize_with(text, class))
}

/// True when `value` is already a fixed point of [`normalize_with`].
pub fn is_normalized(value: &str, class: WordClass) -> bool {
    normalize_with(value, class) == value
}
