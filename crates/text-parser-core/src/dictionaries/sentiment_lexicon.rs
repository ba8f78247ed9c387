//! Sentiment lexicon for the builtin scorer.
//!
//! Valences follow the usual −4..4 lexicon scale. Negators flip the sign of
//! the word they precede; boosters and dampeners scale it.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Word → valence in `[-4.0, 4.0]`.
pub static VALENCES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Positive
    map.extend([
        ("love", 3.2),
        ("loves", 3.2),
        ("loved", 2.9),
        ("lovely", 2.8),
        ("wonderful", 2.7),
        ("excellent", 2.7),
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("fantastic", 2.6),
        ("great", 3.1),
        ("good", 1.9),
        ("nice", 1.8),
        ("happy", 2.7),
        ("glad", 2.0),
        ("joy", 2.8),
        ("delight", 2.9),
        ("delightful", 2.8),
        ("beautiful", 2.9),
        ("brilliant", 2.8),
        ("best", 3.2),
        ("better", 1.9),
        ("like", 1.5),
        ("likes", 1.5),
        ("enjoy", 2.2),
        ("enjoyed", 2.3),
        ("pleasant", 2.3),
        ("perfect", 2.7),
        ("fun", 2.3),
        ("friendly", 2.2),
        ("kind", 2.4),
        ("calm", 1.3),
        ("success", 2.7),
        ("win", 2.8),
        ("won", 2.7),
        ("thank", 1.5),
        ("thanks", 1.9),
        ("hope", 1.9),
        ("proud", 2.1),
        ("safe", 1.9),
        ("sunny", 1.6),
        ("favorite", 2.0),
        ("recommend", 1.5),
    ]);

    // Negative
    map.extend([
        ("hate", -2.7),
        ("hates", -2.7),
        ("hated", -3.2),
        ("terrible", -2.1),
        ("horrible", -2.5),
        ("awful", -2.0),
        ("bad", -2.5),
        ("worse", -2.1),
        ("worst", -3.1),
        ("sad", -2.1),
        ("angry", -2.3),
        ("upset", -1.6),
        ("ugly", -2.3),
        ("poor", -2.1),
        ("boring", -1.3),
        ("annoying", -1.7),
        ("disappointing", -2.2),
        ("disappointed", -1.9),
        ("fail", -2.5),
        ("failed", -2.3),
        ("failure", -2.3),
        ("broken", -1.4),
        ("pain", -2.3),
        ("hurt", -2.4),
        ("afraid", -2.2),
        ("fear", -2.2),
        ("cry", -2.1),
        ("lose", -1.3),
        ("lost", -1.3),
        ("wrong", -2.1),
        ("problem", -1.7),
        ("dislike", -1.6),
        ("disgusting", -2.4),
        ("miserable", -2.2),
        ("stupid", -2.4),
        ("dead", -3.3),
        ("kill", -3.7),
        ("war", -2.9),
        ("sick", -2.3),
        ("tired", -1.9),
    ]);

    map
});

/// Words that invert the valence of a following sentiment word.
pub static NEGATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "cannot",
        "isn't", "aren't", "wasn't", "weren't", "don't", "doesn't", "didn't", "won't", "can't",
        "couldn't", "shouldn't", "wouldn't", "hardly",
    ]
    .into_iter()
    .collect()
});

/// Intensity modifiers: multiplier applied to the next sentiment word.
pub static MODIFIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Boosters
    map.extend([
        ("very", 1.3),
        ("really", 1.3),
        ("extremely", 1.3),
        ("incredibly", 1.3),
        ("so", 1.3),
        ("totally", 1.3),
        ("absolutely", 1.3),
        ("truly", 1.3),
    ]);

    // Dampeners
    map.extend([
        ("slightly", 0.7),
        ("somewhat", 0.7),
        ("barely", 0.7),
        ("marginally", 0.7),
    ]);

    map
});

/// Valence of a lowercase word, if it carries sentiment.
pub fn valence(word: &str) -> Option<f64> {
    VALENCES.get(word).copied()
}

/// Check whether a lowercase word negates what follows.
pub fn is_negator(word: &str) -> bool {
    NEGATORS.contains(word) || word.ends_with("n't")
}

/// Intensity multiplier of a lowercase word, if it is a booster or dampener.
pub fn modifier(word: &str) -> Option<f64> {
    MODIFIERS.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_of_common_words() {
        assert!(valence("love").unwrap() > 0.0);
        assert!(valence("hate").unwrap() < 0.0);
        assert!(valence("table").is_none());
    }

    #[test]
    fn negators_include_contractions() {
        assert!(is_negator("not"));
        assert!(is_negator("mustn't"));
        assert!(!is_negator("note"));
    }

    #[test]
    fn modifiers_scale_up_and_down() {
        assert!(modifier("very").unwrap() > 1.0);
        assert!(modifier("slightly").unwrap() < 1.0);
        assert!(modifier("dog").is_none());
    }
}
