//! Abbreviations whose trailing period does not end a sentence.
//!
//! Used by [`crate::text::words`] so that "Dr. Smith" keeps "Smith" inside
//! the current sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase abbreviations, without their trailing period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "st", "hon", "capt", "col",
        "gen", "lt", "maj", "sgt", "adm", "sen", "rep", "gov", "pres",
    ]);

    // Corporate suffixes
    set.extend(["inc", "corp", "co", "ltd", "llc", "plc", "bros"]);

    // Latin and reference abbreviations
    set.extend(["etc", "vs", "cf", "al", "approx", "dept", "est", "fig", "vol"]);

    // Months
    set.extend([
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]);

    set
});

/// Check whether `word` (with or without a trailing period) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let trimmed = word.trim_end_matches('.');
    ABBREVIATIONS.contains(trimmed.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_abbreviations() {
        assert!(is_abbreviation("Dr"));
        assert!(is_abbreviation("mr."));
        assert!(is_abbreviation("Inc"));
    }

    #[test]
    fn ordinary_words_are_not() {
        assert!(!is_abbreviation("day"));
        assert!(!is_abbreviation("Paris"));
    }
}
