//! Text processing utilities.
//!
//! Provides word tokenization with sentence-start tracking and paragraph
//! splitting for use by the builtin NLP backend.

use unicode_segmentation::UnicodeSegmentation;

use crate::dictionaries::abbreviations::is_abbreviation;

/// A word-level token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken<'a> {
    /// The token text exactly as it appears in the source.
    pub text: &'a str,
    /// Byte offset of the first character (inclusive).
    pub start: usize,
    /// Byte offset past the last character (exclusive).
    pub end: usize,
    /// Whether this token opens a sentence.
    pub sentence_start: bool,
}

impl WordToken<'_> {
    /// Whether the first character is uppercase.
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Lowercase form with typographic apostrophes normalized to `'`.
    pub fn folded(&self) -> String {
        self.text.replace('\u{2019}', "'").to_lowercase()
    }
}

/// Split text into word tokens along Unicode word boundaries (UAX #29).
///
/// Segments without any alphanumeric character (spaces, punctuation) are
/// dropped. A token is marked as sentence-initial when it is the first word
/// of the text or follows a `.`, `!` or `?` that is not part of an
/// abbreviation or an initial.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn words(text: &str) -> Vec<WordToken<'_>> {
    let mut tokens: Vec<WordToken<'_>> = Vec::new();
    let mut at_sentence_start = true;

    for (start, segment) in text.split_word_bound_indices() {
        if segment.chars().any(char::is_alphanumeric) {
            tokens.push(WordToken {
                text: segment,
                start,
                end: start + segment.len(),
                sentence_start: at_sentence_start,
            });
            at_sentence_start = false;
        } else if segment.chars().any(is_sentence_terminator) {
            let after_abbreviation = segment.starts_with('.')
                && tokens
                    .last()
                    .is_some_and(|prev| prev.end == start && is_non_terminal(prev.text));
            if !after_abbreviation {
                at_sentence_start = true;
            }
        }
    }

    tokens
}

/// Split text into paragraphs.
///
/// A paragraph ends at a line that is empty or whitespace-only. Both `\n`
/// and `\r\n` line endings are accepted; lines are rejoined with `\n`.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

/// The first paragraph of the text, or an empty string for blank input.
pub fn first_paragraph(text: &str) -> String {
    split_paragraphs(text).into_iter().next().unwrap_or_default()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// A word whose trailing period does not close the sentence.
fn is_non_terminal(word: &str) -> bool {
    if is_abbreviation(word) {
        return true;
    }
    // Single uppercase letter = initial ("J. Smith")
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}
