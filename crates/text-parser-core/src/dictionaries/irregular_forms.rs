//! Irregular inflections mapped to their dictionary base form.
//!
//! Covers the forms that suffix rules get wrong: strong verbs, the
//! auxiliaries, irregular plurals and comparative/superlative adjectives.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Inflected form → lemma, all lowercase.
pub static IRREGULAR_FORMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Auxiliaries and modals
    map.extend([
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("'s", "be"),
        ("has", "have"),
        ("had", "have"),
        ("having", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("doing", "do"),
        ("goes", "go"),
        ("went", "go"),
        ("gone", "go"),
    ]);

    // Strong verbs: past tense and past participle
    map.extend([
        ("ate", "eat"),
        ("eaten", "eat"),
        ("began", "begin"),
        ("begun", "begin"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("built", "build"),
        ("caught", "catch"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("came", "come"),
        ("drank", "drink"),
        ("drunk", "drink"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("felt", "feel"),
        ("fought", "fight"),
        ("found", "find"),
        ("flew", "fly"),
        ("flown", "fly"),
        ("forgot", "forget"),
        ("forgotten", "forget"),
        ("froze", "freeze"),
        ("frozen", "freeze"),
        ("gave", "give"),
        ("given", "give"),
        ("got", "get"),
        ("gotten", "get"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("heard", "hear"),
        ("held", "hold"),
        ("kept", "keep"),
        ("knew", "know"),
        ("known", "know"),
        ("led", "lead"),
        ("left", "leave"),
        ("lost", "lose"),
        ("made", "make"),
        ("meant", "mean"),
        ("met", "meet"),
        ("paid", "pay"),
        ("ran", "run"),
        ("rang", "ring"),
        ("rode", "ride"),
        ("ridden", "ride"),
        ("rose", "rise"),
        ("risen", "rise"),
        ("said", "say"),
        ("saw", "see"),
        ("seen", "see"),
        ("sold", "sell"),
        ("sent", "send"),
        ("sang", "sing"),
        ("sung", "sing"),
        ("sat", "sit"),
        ("slept", "sleep"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("spent", "spend"),
        ("stood", "stand"),
        ("stole", "steal"),
        ("stolen", "steal"),
        ("swam", "swim"),
        ("swum", "swim"),
        ("taught", "teach"),
        ("told", "tell"),
        ("thought", "think"),
        ("threw", "throw"),
        ("thrown", "throw"),
        ("took", "take"),
        ("taken", "take"),
        ("understood", "understand"),
        ("woke", "wake"),
        ("woken", "wake"),
        ("wore", "wear"),
        ("worn", "wear"),
        ("won", "win"),
        ("wrote", "write"),
        ("written", "write"),
    ]);

    // Irregular plurals
    map.extend([
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lives", "life"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("leaves", "leaf"),
        ("wolves", "wolf"),
        ("halves", "half"),
        ("data", "datum"),
        ("criteria", "criterion"),
        ("analyses", "analysis"),
    ]);

    // Regular forms the suffix rules mangle
    map.extend([
        ("opened", "open"),
        ("opening", "open"),
        ("edited", "edit"),
        ("editing", "edit"),
        ("exited", "exit"),
        ("exiting", "exit"),
        ("focused", "focus"),
        ("focusing", "focus"),
        ("created", "create"),
        ("creating", "create"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("heroes", "hero"),
        ("buses", "bus"),
        ("bonuses", "bonus"),
        ("campuses", "campus"),
        ("focuses", "focus"),
        ("statuses", "status"),
        ("viruses", "virus"),
    ]);

    // Comparatives and superlatives
    map.extend([
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("more", "much"),
        ("most", "much"),
        ("less", "little"),
        ("least", "little"),
        ("further", "far"),
        ("farther", "far"),
    ]);

    map
});

/// Words ending in `-ing`, `-ed` or `-s` that are already base forms.
pub static INVARIANT_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| {
        [
            "bring", "string", "thing", "sing", "king", "ring", "wing", "spring", "swing", "sting",
            "morning", "evening", "nothing", "something", "anything", "everything", "during",
            "ceiling", "red", "bed", "need", "seed", "feed", "speed", "shed", "bleed", "bred",
            "this", "his", "its", "is", "was", "has", "us", "yes", "bus", "plus", "thus", "gas",
            "news", "always", "perhaps", "series", "species", "lens", "bias", "chaos", "less",
            "class", "glass", "grass", "boss", "loss", "process", "success", "business",
            "hundred", "sacred", "naked", "wicked", "physics", "mathematics", "economics",
        ]
        .into_iter()
        .collect()
    });

/// Look up the lemma of an irregular form (expects lowercase input).
pub fn irregular_lemma(word: &str) -> Option<&'static str> {
    IRREGULAR_FORMS.get(word).copied()
}

/// Check whether a word ending in an inflection-like suffix is already a base form.
pub fn is_invariant(word: &str) -> bool {
    INVARIANT_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auxiliaries_resolve_to_be() {
        assert_eq!(irregular_lemma("are"), Some("be"));
        assert_eq!(irregular_lemma("was"), Some("be"));
    }

    #[test]
    fn strong_verbs_and_plurals() {
        assert_eq!(irregular_lemma("ran"), Some("run"));
        assert_eq!(irregular_lemma("children"), Some("child"));
        assert_eq!(irregular_lemma("walked"), None);
        assert_eq!(irregular_lemma("opened"), Some("open"));
    }

    #[test]
    fn invariant_words() {
        assert!(is_invariant("thing"));
        assert!(is_invariant("news"));
        assert!(!is_invariant("dogs"));
    }
}
