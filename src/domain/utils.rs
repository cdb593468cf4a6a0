use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

const INVALID_FILE_NAME_CHARS: &str = r#"[\\/:*?"<>|\p{Cc}]"#;

pub static REGEX_COLLECTION: LazyLock<RegexCollection> = LazyLock::new(|| {
    let invalid_chars = Regex::new(INVALID_FILE_NAME_CHARS).expect("Invalid regex");
    let whitespace = Regex::new(r"\s+").expect("Invalid regex");
    RegexCollection {
        invalid_chars,
        whitespace,
    }
});

pub struct RegexCollection {
    pub invalid_chars: Regex,
    pub whitespace: Regex,
}

/// Turns a caller supplied name into something safe to use as a file name.
#[must_use]
pub fn sanitise_name(name: &str) -> String {
    let normalised = name.nfkc().collect::<String>();
    let stripped = REGEX_COLLECTION.invalid_chars.replace_all(&normalised, "");
    REGEX_COLLECTION
        .whitespace
        .replace_all(stripped.trim(), "_")
        .into_owned()
}

/// Names that sanitise to nothing, or to dots only, cannot be stored.
#[must_use]
pub fn is_usable_name(sanitised: &str) -> bool {
    !sanitised.chars().all(|c| c == '.')
}
