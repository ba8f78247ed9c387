//! Lexicon-based sentiment scoring.
//!
//! Only the first paragraph is scored. Each sentiment-bearing word
//! contributes its valence, scaled by a booster/dampener directly before it
//! and dampened-and-flipped by a negator within the three preceding words.
//! The raw sum is squashed into `[-1.0, 1.0]`.

use crate::dictionaries::sentiment_lexicon::{is_negator, modifier, valence};
use crate::text;

use super::lemma::base_form;

/// Multiplier applied to a negated valence.
const NEGATION_SCALAR: f64 = -0.74;

/// How many preceding words a negator reaches.
const NEGATION_WINDOW: usize = 3;

/// Normalization constant for `sum / sqrt(sum² + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Score the polarity of the first paragraph of `text`.
///
/// Returns `0.0` for blank or neutral text; otherwise a value in
/// `[-1.0, 1.0]` rounded to four decimals.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score(text: &str) -> f64 {
    let paragraph = text::first_paragraph(text);
    let words: Vec<String> = text::words(&paragraph).iter().map(|w| w.folded()).collect();

    let mut sum = 0.0;
    for (i, word) in words.iter().enumerate() {
        let Some(mut value) = word_valence(word) else {
            continue;
        };

        if let Some(prev) = i.checked_sub(1).map(|p| words[p].as_str())
            && let Some(scale) = modifier(prev)
        {
            value *= scale;
        }

        let window = &words[i.saturating_sub(NEGATION_WINDOW)..i];
        if window.iter().any(|w| is_negator(w)) {
            value *= NEGATION_SCALAR;
        }

        sum += value;
    }

    if sum == 0.0 {
        return 0.0;
    }
    let normalized = sum / (sum * sum + ALPHA).sqrt();
    (normalized.clamp(-1.0, 1.0) * 10_000.0).round() / 10_000.0
}

fn word_valence(word: &str) -> Option<f64> {
    valence(word).or_else(|| valence(&base_form(word)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_scores_above_zero() {
        assert!(score("Alice loves Paris") > 0.0);
        assert!(score("What a wonderful, happy day") > 0.5);
    }

    #[test]
    fn negative_text_scores_below_zero() {
        assert!(score("This is a terrible, awful movie") < 0.0);
    }

    #[test]
    fn neutral_and_empty_text_score_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("The table is in the kitchen"), 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        assert!(score("good") > 0.0);
        assert!(score("not good") < 0.0);
        assert!(score("I don't really like it") < 0.0);
    }

    #[test]
    fn boosters_increase_magnitude() {
        assert!(score("very good") > score("good"));
        assert!(score("slightly good") < score("good"));
    }

    #[test]
    fn only_first_paragraph_counts() {
        assert_eq!(score("The table is here.\n\nI hate everything."), 0.0);
        assert_eq!(score("The table is here.\r\n\r\nI hate everything."), 0.0);
        assert_eq!(score("The table is here.\n \nI hate everything."), 0.0);
    }

    #[test]
    fn inflected_forms_use_base_valence() {
        assert!(score("they hated it") < 0.0);
    }

    #[test]
    fn score_stays_in_range() {
        let gushing = "love love love amazing wonderful great best awesome fantastic";
        let value = score(gushing);
        assert!(value > 0.9 && value <= 1.0);
    }
}
