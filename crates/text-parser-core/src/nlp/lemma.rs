//! Rule-based English lemmatization.
//!
//! Lookup order for a lowercase word: irregular-form dictionary, words that
//! already are base forms, then suffix stripping for `-ies`, `-es`, `-s`,
//! `-ing` and `-ed` with consonant undoubling and silent-e restoration.

use crate::dictionaries::gazetteers::{is_first_name, is_organization, is_place};
use crate::dictionaries::irregular_forms::{irregular_lemma, is_invariant};
use crate::text::{self, WordToken};

/// Resolve the lemma of a token, or `None` when no lemma applies.
///
/// Tokens containing digits or symbols have no lemma. Proper nouns and the
/// pronoun "I" keep their surface form. A capital letter marks a proper noun
/// outside sentence-initial position; at a sentence start only a known name,
/// place or organization does.
pub fn lemma_of(token: &WordToken<'_>) -> Option<String> {
    let folded = token.folded();
    if !folded.chars().all(|c| c.is_alphabetic() || c == '\'') {
        return None;
    }
    if token.text == "I" || is_proper_noun(token, &folded) {
        return Some(token.text.to_string());
    }
    Some(base_form(&folded))
}

fn is_proper_noun(token: &WordToken<'_>, folded: &str) -> bool {
    if !token.is_capitalized() {
        return false;
    }
    !token.sentence_start || is_first_name(folded) || is_place(folded) || is_organization(folded)
}

/// Base form of a lowercase word.
pub fn base_form(word: &str) -> String {
    if let Some(lemma) = irregular_lemma(word) {
        return lemma.to_string();
    }
    if is_invariant(word) || word.chars().count() <= 3 {
        return word.to_string();
    }
    strip_suffix(word).unwrap_or_else(|| word.to_string())
}

/// Lemmatize every word of `text`, falling back to the trimmed surface form.
///
/// Empty results are skipped; order and duplicates follow the text.
pub fn lemmatize(text: &str) -> Vec<String> {
    text::words(text)
        .iter()
        .filter_map(|token| {
            let lemma = lemma_of(token).unwrap_or_else(|| token.text.trim().to_string());
            (!lemma.is_empty()).then_some(lemma)
        })
        .collect()
}

fn strip_suffix(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ies")
        && stem.len() >= 2
    {
        return Some(format!("{stem}y"));
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    if let Some(stem) = word.strip_suffix('s') {
        return Some(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ing")
        && stem.len() >= 2
        && stem.chars().any(is_vowel)
    {
        return Some(restore_stem(stem));
    }
    if let Some(stem) = word.strip_suffix("ed")
        && stem.len() >= 2
        && stem.chars().any(is_vowel)
    {
        if let Some(base) = stem.strip_suffix('i') {
            return Some(format!("{base}y"));
        }
        if stem.ends_with('e') {
            return Some(format!("{stem}e"));
        }
        return Some(restore_stem(stem));
    }
    None
}

/// Undo consonant doubling ("runn" → "run") or restore a silent e ("mak" → "make").
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 4 && chars[n - 1] == chars[n - 2] && !is_vowel(chars[n - 1]) {
        if matches!(chars[n - 1], 'l' | 's' | 'z') {
            return stem.to_string();
        }
        return chars[..n - 1].iter().collect();
    }

    let long_at = n >= 5 && stem.ends_with("at") && !matches!(chars[n - 3], 'e' | 'o' | 'a');
    if long_at || silent_e_ending(stem, &chars) {
        return format!("{stem}e");
    }

    let short_cvc = n >= 3
        && n <= 4
        && !is_vowel(chars[n - 3])
        && is_vowel(chars[n - 2])
        && !is_vowel(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y');
    let short_vc = n == 2 && is_vowel(chars[0]) && !is_vowel(chars[1]);
    if short_cvc || short_vc {
        return format!("{stem}e");
    }

    stem.to_string()
}

/// Stem endings that only occur in English when a final e was dropped.
fn silent_e_ending(stem: &str, chars: &[char]) -> bool {
    let n = chars.len();
    if ["bl", "iz", "iv", "v", "u", "c", "eng", "ung", "rg", "lg", "dg"]
        .iter()
        .any(|s| stem.ends_with(s))
    {
        return true;
    }
    // "chang", "arrang" and "manag", but not "hang" or "bang"
    if n >= 5 && (stem.ends_with("ang") || stem.ends_with("ag")) {
        return true;
    }
    // "releas", "rais", "clos", "caus", but not "bias"
    n >= 2 && chars[n - 1] == 's' && is_vowel(chars[n - 2]) && !stem.ends_with("ias")
}

const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}
