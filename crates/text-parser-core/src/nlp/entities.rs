//! Named-entity extraction.
//!
//! Capitalized words are grouped into name spans and each span is
//! classified against the gazetteers in [`crate::dictionaries::gazetteers`].
//! Spans that match no rule are dropped, so the output only ever contains
//! organizations, persons and places.

use std::sync::LazyLock;

use regex::Regex;

use super::language::is_english_stopword;
use super::{Entity, EntityCategory};
use crate::dictionaries::gazetteers::{
    is_first_name, is_organization, is_organization_indicator, is_organization_prefix,
    is_person_title, is_place,
};
use crate::text::{self, WordToken};

/// Lowercase words allowed between two capitalized parts of one name.
const CONNECTORS: [&str; 8] = ["of", "de", "du", "da", "del", "der", "van", "von"];

static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,5}$").expect("valid regex"));

/// Gazetteer-driven entity extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityExtractor {
    join_names: bool,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl EntityExtractor {
    /// Create an extractor. With `join_names` adjacent capitalized words
    /// form one span ("New York"); without it every word stands alone.
    pub const fn new(join_names: bool) -> Self {
        Self { join_names }
    }

    /// Whether adjacent capitalized words are joined.
    pub const fn join_names(&self) -> bool {
        self.join_names
    }

    /// Extract entities from `text`, in text order.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len(), join_names = self.join_names))]
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        let tokens = text::words(text);
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !is_candidate(&tokens[i]) {
                i += 1;
                continue;
            }

            let group = if self.join_names {
                name_group(text, &tokens, i)
            } else {
                vec![i]
            };
            let next = group.last().map_or(i + 1, |last| last + 1);

            if let Some(entity) = classify_with_retry(text, &tokens, &group) {
                entities.push(entity);
            }
            i = next;
        }

        tracing::debug!(count = entities.len(), "entities extracted");
        entities
    }
}

fn is_candidate(token: &WordToken<'_>) -> bool {
    token.is_capitalized() && token.text != "I"
}

/// Token indices of the name starting at `start`.
fn name_group(text: &str, tokens: &[WordToken<'_>], start: usize) -> Vec<usize> {
    let mut group = vec![start];
    let mut last = start;

    while !has_possessive(tokens[last].text) {
        let Some(next) = tokens.get(last + 1) else {
            break;
        };
        if is_candidate(next) && !next.sentence_start && joined(text, &tokens[last], next) {
            group.push(last + 1);
            last += 1;
            continue;
        }

        let connector = next.text;
        let Some(after) = tokens.get(last + 2) else {
            break;
        };
        if CONNECTORS.contains(&connector)
            && is_candidate(after)
            && !after.sentence_start
            && joined(text, &tokens[last], next)
            && joined(text, next, after)
        {
            group.extend([last + 1, last + 2]);
            last += 2;
            continue;
        }
        break;
    }

    group
}

/// Two tokens separated only by spaces or tabs on the same line.
fn joined(text: &str, left: &WordToken<'_>, right: &WordToken<'_>) -> bool {
    let gap = &text[left.end..right.start];
    !gap.is_empty() && gap.chars().all(|c| c == ' ' || c == '\t')
}

fn has_possessive(word: &str) -> bool {
    word.ends_with("'s") || word.ends_with("\u{2019}s")
}

/// Byte length of a trailing possessive suffix, if any.
fn possessive_len(word: &str) -> usize {
    let Some(rest) = word.strip_suffix(['s', 'S']) else {
        return 0;
    };
    if rest.ends_with('\'') {
        2
    } else if rest.ends_with('\u{2019}') {
        '\u{2019}'.len_utf8() + 1
    } else {
        0
    }
}

/// Classify a group; a sentence-opening group that fails is retried
/// without its first word.
fn classify_with_retry(text: &str, tokens: &[WordToken<'_>], group: &[usize]) -> Option<Entity> {
    let mut group = group;
    loop {
        if let Some(entity) = classify(text, tokens, group) {
            return Some(entity);
        }
        let first = group.first()?;
        if group.len() < 2 || !tokens[*first].sentence_start {
            return None;
        }
        group = &group[1..];
        // A connector cannot open a name.
        while group
            .first()
            .is_some_and(|idx| CONNECTORS.contains(&tokens[*idx].text))
        {
            group = &group[1..];
        }
    }
}

fn classify(text: &str, tokens: &[WordToken<'_>], group: &[usize]) -> Option<Entity> {
    let (&first_idx, &last_idx) = (group.first()?, group.last()?);
    let first = &tokens[first_idx];
    let last = &tokens[last_idx];

    let words: Vec<String> = group
        .iter()
        .map(|&idx| {
            let token = &tokens[idx];
            let word = token.folded();
            let cut = possessive_len(&word);
            word[..word.len() - cut].to_string()
        })
        .collect();
    let span = words.join(" ");
    let first_word = words[0].as_str();
    let last_word = words[words.len() - 1].as_str();
    let multi = words.len() > 1;

    let end = last.end - possessive_len(last.text);
    let entity = |category: EntityCategory, start: usize| Entity {
        category,
        text: text[start..end].to_string(),
        start,
        end,
    };

    if is_organization(&span)
        || (multi && is_organization_indicator(last_word))
        || (multi && is_organization_prefix(first_word))
    {
        return Some(entity(EntityCategory::Organization, first.start));
    }

    if is_person_title(first_word) {
        if !multi {
            return None;
        }
        let after_title = &tokens[group[1]];
        return Some(entity(EntityCategory::Person, after_title.start));
    }

    // A lone common word opening a sentence ("The", "When") is not a name.
    if !multi && first.sentence_start && is_english_stopword(first_word) {
        return None;
    }

    if is_place(&span) {
        return Some(entity(EntityCategory::Place, first.start));
    }

    let after_title = first_idx
        .checked_sub(1)
        .is_some_and(|prev| is_person_title(&tokens[prev].folded()));
    if after_title || is_first_name(first_word) {
        return Some(entity(EntityCategory::Person, first.start));
    }

    let surface = &text[first.start..end];
    if !multi && ACRONYM.is_match(surface) && !is_english_stopword(first_word) {
        return Some(entity(EntityCategory::Organization, first.start));
    }

    None
}
