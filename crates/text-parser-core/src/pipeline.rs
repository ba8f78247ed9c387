//! Text analysis pipeline.
//!
//! Runs the backend operations in a fixed order (language, entities,
//! sentiment, lemmas, embedding neighbors per lemma) and collects the
//! results into an [`AnalysisReport`].

use serde::{Deserialize, Serialize};

use crate::nlp::{Entity, LanguageTag, Neighbor, NlpBackend};

/// Everything one run of the pipeline produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Dominant language, or `und`.
    pub language: LanguageTag,
    /// Named entities in text order.
    pub entities: Vec<Entity>,
    /// Polarity of the first paragraph in `[-1.0, 1.0]`.
    pub sentiment: f64,
    /// One entry per word, in text order.
    pub alternatives: Vec<LemmaAlternatives>,
}

/// A lemma and its embedding neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaAlternatives {
    /// Base form of the word.
    pub lemma: String,
    /// Nearest neighbors, nearest first. Empty for unknown words.
    pub neighbors: Vec<Neighbor>,
}

/// Analyze `text` with `backend`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze(backend: &dyn NlpBackend, text: &str) -> AnalysisReport {
    let language = backend.detect_language(text);
    let entities = backend.extract_entities(text);

    let sentiment = backend.score_sentiment(text);
    let sentiment = if sentiment.is_finite() { sentiment } else { 0.0 };

    let alternatives: Vec<LemmaAlternatives> = backend
        .lemmatize(text)
        .into_iter()
        .filter_map(|lemma| {
            let lemma = lemma.trim();
            (!lemma.is_empty()).then(|| LemmaAlternatives {
                neighbors: backend.embed_neighbors(lemma),
                lemma: lemma.to_string(),
            })
        })
        .collect();

    tracing::debug!(
        language = %language,
        entities = entities.len(),
        sentiment,
        lemmas = alternatives.len(),
        "analysis complete"
    );

    AnalysisReport {
        language,
        entities,
        sentiment,
        alternatives,
    }
}
