//! Dominant-language detection.
//!
//! Two stages. Letters are first bucketed by Unicode script; a dominant
//! script used by essentially one language decides directly. Latin and
//! Cyrillic text is then scored against per-language stopword profiles from
//! the `stop-words` crate, and the language with the most hits wins.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{LANGUAGE, get};

use super::LanguageTag;
use crate::text;

/// Stopword profile of one language.
struct Profile {
    code: &'static str,
    words: HashSet<String>,
}

/// Latin-script profiles; on equal hit counts the earlier entry wins.
fn profile_languages() -> [(&'static str, LANGUAGE); 14] {
    [
        ("en", LANGUAGE::English),
        ("fr", LANGUAGE::French),
        ("de", LANGUAGE::German),
        ("es", LANGUAGE::Spanish),
        ("it", LANGUAGE::Italian),
        ("pt", LANGUAGE::Portuguese),
        ("nl", LANGUAGE::Dutch),
        ("sv", LANGUAGE::Swedish),
        ("da", LANGUAGE::Danish),
        ("no", LANGUAGE::Norwegian),
        ("fi", LANGUAGE::Finnish),
        ("tr", LANGUAGE::Turkish),
        ("pl", LANGUAGE::Polish),
        ("hu", LANGUAGE::Hungarian),
    ]
}

impl Profile {
    fn load(code: &'static str, lang: LANGUAGE) -> Self {
        Self {
            code,
            words: get(lang).iter().map(|s| s.to_string()).collect(),
        }
    }
}

static PROFILES: LazyLock<Vec<Profile>> = LazyLock::new(|| {
    profile_languages()
        .into_iter()
        .map(|(code, lang)| Profile::load(code, lang))
        .collect()
});

static CYRILLIC_PROFILES: LazyLock<Vec<Profile>> =
    LazyLock::new(|| vec![Profile::load("ru", LANGUAGE::Russian)]);

/// Check whether a lowercase word is an English stopword.
pub fn is_english_stopword(word: &str) -> bool {
    PROFILES
        .first()
        .is_some_and(|profile| profile.words.contains(word))
}

/// Writing systems distinguished by the script stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Cyrillic,
    Greek,
    Arabic,
    Hebrew,
    Devanagari,
    Thai,
    Hangul,
    Kana,
    Han,
    Other,
}

impl Script {
    const ALL: [Self; 11] = [
        Self::Latin,
        Self::Cyrillic,
        Self::Greek,
        Self::Arabic,
        Self::Hebrew,
        Self::Devanagari,
        Self::Thai,
        Self::Hangul,
        Self::Kana,
        Self::Han,
        Self::Other,
    ];

    fn of(ch: char) -> Self {
        match ch {
            'a'..='z' | 'A'..='Z' | '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}' => {
                Self::Latin
            }
            '\u{0370}'..='\u{03FF}' => Self::Greek,
            '\u{0400}'..='\u{04FF}' => Self::Cyrillic,
            '\u{0590}'..='\u{05FF}' => Self::Hebrew,
            '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' => Self::Arabic,
            '\u{0900}'..='\u{097F}' => Self::Devanagari,
            '\u{0E00}'..='\u{0E7F}' => Self::Thai,
            '\u{1100}'..='\u{11FF}' | '\u{AC00}'..='\u{D7AF}' => Self::Hangul,
            '\u{3040}'..='\u{30FF}' => Self::Kana,
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' => Self::Han,
            _ => Self::Other,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Detect the dominant language of `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn detect(text: &str) -> LanguageTag {
    let mut counts = [0usize; Script::ALL.len()];
    let mut ascii_only = true;
    for ch in text.chars().filter(|c| c.is_alphabetic()) {
        counts[Script::of(ch).index()] += 1;
        ascii_only &= ch.is_ascii();
    }

    // On equal counts the script listed first in `Script::ALL` wins.
    let mut dominant: Option<Script> = None;
    for script in Script::ALL {
        let count = counts[script.index()];
        if count > 0 && dominant.is_none_or(|best| count > counts[best.index()]) {
            dominant = Some(script);
        }
    }
    let Some(dominant) = dominant else {
        tracing::debug!("no letters in input");
        return LanguageTag::undetermined();
    };

    let code = match dominant {
        Script::Latin => {
            return best_profile(text, &PROFILES).map_or_else(
                || {
                    if ascii_only {
                        LanguageTag::new("en")
                    } else {
                        LanguageTag::undetermined()
                    }
                },
                LanguageTag::new,
            );
        }
        Script::Cyrillic => {
            return best_profile(text, &CYRILLIC_PROFILES)
                .map_or_else(LanguageTag::undetermined, LanguageTag::new);
        }
        // Japanese mixes kana with kanji; kana alone settles it.
        Script::Han if counts[Script::Kana.index()] > 0 => "ja",
        Script::Kana => "ja",
        Script::Han => "zh",
        Script::Hangul => "ko",
        Script::Greek => "el",
        Script::Arabic => "ar",
        Script::Hebrew => "he",
        Script::Devanagari => "hi",
        Script::Thai => "th",
        Script::Other => return LanguageTag::undetermined(),
    };
    LanguageTag::new(code)
}

/// The profile with the most stopword hits, if any word matched at all.
fn best_profile(text: &str, profiles: &[Profile]) -> Option<&'static str> {
    let words: Vec<String> = text::words(text).iter().map(|w| w.folded()).collect();

    let mut best: Option<(&'static str, usize)> = None;
    for profile in profiles {
        let hits = words.iter().filter(|w| profile.words.contains(*w)).count();
        if hits > 0 && best.is_none_or(|(_, top)| hits > top) {
            best = Some((profile.code, hits));
        }
    }

    let (code, hits) = best?;
    tracing::debug!(code, hits, words = words.len(), "stopword profile match");
    Some(code)
}
