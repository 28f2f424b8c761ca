//! Text normalization helpers shared by comparison, extraction and the
//! selection pipeline.

pub mod french;

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref LINE_BREAKS: Regex = Regex::new(r"\r\n|\n|\r").unwrap();
    static ref UNDERSCORE_RUNS: Regex = Regex::new(r"_{2,}").unwrap();
}

/// Normalize text for comparison: lowercase, strip diacritics, replace
/// punctuation with spaces and collapse whitespace.
///
/// Both sides of every comparison go through this function, as does the act
/// body before pattern matching. Idempotent.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    let spaced = NON_WORD.replace_all(&folded, " ");
    WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}

/// Clean raw text selected in the act body before delivering it to a field.
///
/// Collapses line breaks and whitespace runs and removes runs of two or more
/// underscores (blank-line placeholders in legacy documents). Unlike
/// [`normalize`] this keeps case and accents: the cleaned text is what the
/// operator will see in the form field.
pub fn clean_selected_text(text: &str) -> String {
    let unwrapped = LINE_BREAKS.replace_all(text, " ");
    let collapsed = WHITESPACE.replace_all(&unwrapped, " ");
    UNDERSCORE_RUNS.replace_all(&collapsed, "").trim().to_string()
}
