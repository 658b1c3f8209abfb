//! Slug normalization for category labels
//!
//! Turns free-text labels into lowercase, diacritic-free, hyphen-delimited
//! strings that can be used as URL path segments.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Runs of whitespace and/or hyphens, collapsed to a single `-`.
/// U+FEFF counts as whitespace here, as it does for web clients.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s\x{FEFF}]+").expect("separator pattern is valid"));

/// Convert a label into a URL slug.
///
/// The label is decomposed (NFD), lowercased, stripped of combining
/// diacritical marks (U+0300..=U+036F), trimmed, and every run of whitespace
/// or hyphens is collapsed into one `-`. Any other character, including `/`,
/// is kept as is.
///
/// ```
/// use navtrail_core::slugify;
///
/// assert_eq!(slugify("Café Noir"), "cafe-noir");
/// assert_eq!(slugify("Shoes/Running"), "shoes/running");
/// ```
pub fn slugify(input: &str) -> String {
    let decomposed: String = input.nfd().collect();
    let stripped: String = decomposed
        .to_lowercase()
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    SEPARATOR_RUN
        .replace_all(stripped.trim_matches(is_space), "-")
        .into_owned()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
